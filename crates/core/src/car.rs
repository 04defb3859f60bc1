//! Car catalog entities.
//!
//! A [`CarModel`] is the easy-mode guessable entity; a [`CarVariant`] is a
//! trim of a model and, paired with its parent as [`VariantWithModel`], the
//! hard-mode entity. Enumerated attributes are stored as TEXT and
//! serialized in SCREAMING_SNAKE_CASE.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Error returned when a stored or user-supplied enum value is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a TEXT-backed enum with `as_str`, `Display`, and `FromStr`.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Database / wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

text_enum!(
    /// Body style of a car model.
    BodyType, "body type", {
        Hatchback => "HATCHBACK",
        Sedan => "SEDAN",
        Wagon => "WAGON",
        Suv => "SUV",
        Coupe => "COUPE",
        Convertible => "CONVERTIBLE",
        Minivan => "MINIVAN",
        Pickup => "PICKUP",
        Van => "VAN",
    }
);

text_enum!(
    /// Energy source of a variant.
    FuelType, "fuel type", {
        Petrol => "PETROL",
        Diesel => "DIESEL",
        Electric => "ELECTRIC",
        Hybrid => "HYBRID",
    }
);

text_enum!(
    /// Gearbox of a variant.
    Transmission, "transmission", {
        Manual => "MANUAL",
        Automatic => "AUTOMATIC",
    }
);

impl FuelType {
    /// Display name used in variant labels.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl Transmission {
    /// Short display name used in variant labels.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Auto",
        }
    }
}

/// A guessable car model (make + model + generation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub generation: Option<String>,
    pub body_type: BodyType,
    pub country_of_origin: String,
    pub production_start_year: i32,
    pub production_end_year: Option<i32>,
    pub wiki_title_fr: Option<String>,
    pub wiki_title_en: Option<String>,
    pub wiki_generation_hint_fr: Option<String>,
    pub wiki_generation_hint_en: Option<String>,
}

/// A trim / engine variant of a [`CarModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarVariant {
    pub id: DbId,
    pub model_id: DbId,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub power_hp: Option<i32>,
    pub engine_type: Option<String>,
    pub displacement_cc: Option<i32>,
    pub max_speed_kmh: Option<i32>,
    pub zero_to_hundred_sec: Option<f64>,
    pub production_start_year: Option<i32>,
    pub production_end_year: Option<i32>,
}

/// A variant together with its parent model, the hard-mode entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantWithModel {
    pub variant: CarVariant,
    pub model: CarModel,
}

impl VariantWithModel {
    /// Production start year after falling back to the parent model.
    pub fn effective_start_year(&self) -> i32 {
        self.variant
            .production_start_year
            .unwrap_or(self.model.production_start_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_round_trip_through_text() {
        for body in BodyType::ALL {
            assert_eq!(body.as_str().parse::<BodyType>().unwrap(), *body);
        }
        assert_eq!("DIESEL".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!(
            "AUTOMATIC".parse::<Transmission>().unwrap(),
            Transmission::Automatic
        );
    }

    #[test]
    fn unknown_enum_text_is_rejected() {
        let err = "STEAM".parse::<FuelType>().unwrap_err();
        assert_eq!(err.kind, "fuel type");
        assert_eq!(err.value, "STEAM");
    }

    #[test]
    fn enums_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&BodyType::Convertible).unwrap();
        assert_eq!(json, "\"CONVERTIBLE\"");
    }
}
