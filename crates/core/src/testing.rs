//! Shared fixtures for unit tests.

use crate::car::{BodyType, CarModel, CarVariant, FuelType, Transmission, VariantWithModel};

pub(crate) fn sample_model() -> CarModel {
    CarModel {
        id: 1,
        make: "Peugeot".into(),
        model: "208".into(),
        generation: Some("II".into()),
        body_type: BodyType::Hatchback,
        country_of_origin: "France".into(),
        production_start_year: 2019,
        production_end_year: None,
        wiki_title_fr: None,
        wiki_title_en: None,
        wiki_generation_hint_fr: None,
        wiki_generation_hint_en: None,
    }
}

pub(crate) fn sample_variant() -> VariantWithModel {
    VariantWithModel {
        variant: CarVariant {
            id: 10,
            model_id: 1,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Manual,
            power_hp: Some(110),
            engine_type: Some("I3".into()),
            displacement_cc: Some(1199),
            max_speed_kmh: Some(190),
            zero_to_hundred_sec: Some(9.6),
            production_start_year: None,
            production_end_year: None,
        },
        model: sample_model(),
    }
}
