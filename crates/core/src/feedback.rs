//! Guess feedback: field-by-field comparison of a guess against the target.
//!
//! Three comparison primitives ([`compare_exact`], [`compare_nullable_exact`],
//! [`compare_ordered`]) are composed into the two feedback shapes,
//! [`ModelFeedback`] for easy mode and [`VariantFeedback`] for hard mode.
//! Every entry carries the *target's* value so the client can reveal a
//! field once it is found, or show bounds after `higher` / `lower`.

use std::cmp::Ordering;

use serde::Serialize;

use crate::car::{BodyType, CarModel, FuelType, Transmission, VariantWithModel};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Outcome of comparing one field.
///
/// `Higher` / `Lower` describe the target relative to the guess: `Higher`
/// means "the true answer is higher than your guess".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    Correct,
    Wrong,
    Higher,
    Lower,
    Unknown,
}

/// One feedback entry: the status plus the target's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFeedback<T> {
    pub status: FieldStatus,
    pub value: T,
}

// ---------------------------------------------------------------------------
// Comparison primitives
// ---------------------------------------------------------------------------

/// Exact match on a non-nullable field: `Correct` or `Wrong`.
pub fn compare_exact<T: PartialEq + ?Sized>(target: &T, guess: &T) -> FieldStatus {
    if target == guess {
        FieldStatus::Correct
    } else {
        FieldStatus::Wrong
    }
}

/// Exact match on a nullable field.
///
/// Absence on either side yields `Unknown` before equality is considered.
pub fn compare_nullable_exact<T: PartialEq + ?Sized>(
    target: Option<&T>,
    guess: Option<&T>,
) -> FieldStatus {
    match (target, guess) {
        (Some(t), Some(g)) => compare_exact(t, g),
        _ => FieldStatus::Unknown,
    }
}

/// Ordered comparison on a nullable numeric field.
///
/// Absence on either side yields `Unknown`, as do values without a defined
/// order (NaN). Ties are always `Correct`.
pub fn compare_ordered<T: PartialOrd>(target: Option<T>, guess: Option<T>) -> FieldStatus {
    let (Some(t), Some(g)) = (target, guess) else {
        return FieldStatus::Unknown;
    };

    match t.partial_cmp(&g) {
        Some(Ordering::Equal) => FieldStatus::Correct,
        Some(Ordering::Greater) => FieldStatus::Higher,
        Some(Ordering::Less) => FieldStatus::Lower,
        None => FieldStatus::Unknown,
    }
}

fn exact<T: PartialEq + Clone>(target: &T, guess: &T) -> FieldFeedback<T> {
    FieldFeedback {
        status: compare_exact(target, guess),
        value: target.clone(),
    }
}

fn nullable_exact<T: PartialEq + Clone>(
    target: &Option<T>,
    guess: &Option<T>,
) -> FieldFeedback<Option<T>> {
    FieldFeedback {
        status: compare_nullable_exact(target.as_ref(), guess.as_ref()),
        value: target.clone(),
    }
}

fn ordered<T: PartialOrd + Copy>(target: Option<T>, guess: Option<T>) -> FieldFeedback<Option<T>> {
    FieldFeedback {
        status: compare_ordered(target, guess),
        value: target,
    }
}

// ---------------------------------------------------------------------------
// Feedback records
// ---------------------------------------------------------------------------

/// Feedback for an easy-mode (model) guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFeedback {
    pub make: FieldFeedback<String>,
    pub model: FieldFeedback<String>,
    pub generation: FieldFeedback<Option<String>>,
    pub body_type: FieldFeedback<BodyType>,
    pub country_of_origin: FieldFeedback<String>,
    pub production_start_year: FieldFeedback<Option<i32>>,
}

/// Feedback for a hard-mode (variant) guess.
///
/// The model-level fields are flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantFeedback {
    #[serde(flatten)]
    pub model_fields: ModelFeedback,
    pub fuel_type: FieldFeedback<Option<FuelType>>,
    pub transmission: FieldFeedback<Option<Transmission>>,
    pub power_hp: FieldFeedback<Option<i32>>,
    pub engine_type: FieldFeedback<Option<String>>,
    pub displacement_cc: FieldFeedback<Option<i32>>,
    pub max_speed_kmh: FieldFeedback<Option<i32>>,
    pub zero_to_hundred_sec: FieldFeedback<Option<f64>>,
}

impl ModelFeedback {
    /// `true` when every field is `Correct`.
    pub fn is_solved(&self) -> bool {
        self.statuses().iter().all(|s| *s == FieldStatus::Correct)
    }

    fn statuses(&self) -> [FieldStatus; 6] {
        [
            self.make.status,
            self.model.status,
            self.generation.status,
            self.body_type.status,
            self.country_of_origin.status,
            self.production_start_year.status,
        ]
    }
}

/// Model-level fields, with start years supplied by the caller so that the
/// variant comparator can pass effective years.
fn model_fields(
    target: &CarModel,
    guess: &CarModel,
    target_start_year: i32,
    guess_start_year: i32,
) -> ModelFeedback {
    ModelFeedback {
        make: exact(&target.make, &guess.make),
        model: exact(&target.model, &guess.model),
        generation: nullable_exact(&target.generation, &guess.generation),
        body_type: exact(&target.body_type, &guess.body_type),
        country_of_origin: exact(&target.country_of_origin, &guess.country_of_origin),
        production_start_year: ordered(Some(target_start_year), Some(guess_start_year)),
    }
}

/// Compare an easy-mode guess against the target model.
pub fn evaluate_model_guess(target: &CarModel, guess: &CarModel) -> ModelFeedback {
    model_fields(
        target,
        guess,
        target.production_start_year,
        guess.production_start_year,
    )
}

/// Compare a hard-mode guess against the target variant.
///
/// The start year is compared on effective values (variant year, else the
/// parent model's year) derived on both sides before comparison.
pub fn evaluate_variant_guess(
    target: &VariantWithModel,
    guess: &VariantWithModel,
) -> VariantFeedback {
    let t = &target.variant;
    let g = &guess.variant;

    VariantFeedback {
        model_fields: model_fields(
            &target.model,
            &guess.model,
            target.effective_start_year(),
            guess.effective_start_year(),
        ),
        fuel_type: nullable_exact(&Some(t.fuel_type), &Some(g.fuel_type)),
        transmission: nullable_exact(&Some(t.transmission), &Some(g.transmission)),
        power_hp: ordered(t.power_hp, g.power_hp),
        engine_type: nullable_exact(&t.engine_type, &g.engine_type),
        displacement_cc: ordered(t.displacement_cc, g.displacement_cc),
        max_speed_kmh: ordered(t.max_speed_kmh, g.max_speed_kmh),
        zero_to_hundred_sec: ordered(t.zero_to_hundred_sec, g.zero_to_hundred_sec),
    }
}

impl VariantFeedback {
    /// `true` when every field is `Correct`.
    pub fn is_solved(&self) -> bool {
        self.model_fields.is_solved()
            && [
                self.fuel_type.status,
                self.transmission.status,
                self.power_hp.status,
                self.engine_type.status,
                self.displacement_cc.status,
                self.max_speed_kmh.status,
                self.zero_to_hundred_sec.status,
            ]
            .iter()
            .all(|s| *s == FieldStatus::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_model, sample_variant};

    // -- primitives --

    #[test]
    fn exact_match_is_correct_and_mismatch_is_wrong() {
        assert_eq!(compare_exact("Peugeot", "Peugeot"), FieldStatus::Correct);
        assert_eq!(compare_exact("Peugeot", "Renault"), FieldStatus::Wrong);
    }

    #[test]
    fn nullable_exact_absence_overrides_mismatch() {
        assert_eq!(
            compare_nullable_exact(None, Some("II")),
            FieldStatus::Unknown
        );
        assert_eq!(
            compare_nullable_exact(Some("II"), None),
            FieldStatus::Unknown
        );
        assert_eq!(compare_nullable_exact::<str>(None, None), FieldStatus::Unknown);
        assert_eq!(
            compare_nullable_exact(Some("II"), Some("III")),
            FieldStatus::Wrong
        );
        assert_eq!(
            compare_nullable_exact(Some("II"), Some("II")),
            FieldStatus::Correct
        );
    }

    #[test]
    fn ordered_matches_numeric_ordering_for_integers() {
        let pairs = [(-5, -5), (-5, 3), (3, -5), (0, 0), (2015, 2012), (90, 130)];
        for (t, g) in pairs {
            let status = compare_ordered(Some(t), Some(g));
            assert_eq!(status == FieldStatus::Correct, t == g, "{t} vs {g}");
            assert_eq!(status == FieldStatus::Higher, t > g, "{t} vs {g}");
            assert_eq!(status == FieldStatus::Lower, t < g, "{t} vs {g}");
        }
    }

    #[test]
    fn ordered_matches_numeric_ordering_for_fractions() {
        let pairs = [(8.5, 6.5), (6.8, 8.2), (9.6, 9.6), (-0.1, 0.1), (0.1, -0.1)];
        for (t, g) in pairs {
            let status = compare_ordered(Some(t), Some(g));
            assert_eq!(status == FieldStatus::Correct, t == g, "{t} vs {g}");
            assert_eq!(status == FieldStatus::Higher, t > g, "{t} vs {g}");
            assert_eq!(status == FieldStatus::Lower, t < g, "{t} vs {g}");
        }
    }

    #[test]
    fn ordered_absence_and_nan_are_unknown() {
        assert_eq!(compare_ordered(None, Some(110)), FieldStatus::Unknown);
        assert_eq!(compare_ordered(Some(110), None), FieldStatus::Unknown);
        assert_eq!(compare_ordered::<i32>(None, None), FieldStatus::Unknown);
        assert_eq!(compare_ordered(Some(f64::NAN), Some(1.0)), FieldStatus::Unknown);
    }

    // -- model feedback --

    #[test]
    fn identical_models_are_correct_everywhere() {
        let model = sample_model();
        let feedback = evaluate_model_guess(&model, &model);
        assert!(feedback.is_solved());
    }

    #[test]
    fn model_feedback_reports_target_values() {
        let target = sample_model();
        let guess = CarModel {
            make: "Renault".into(),
            generation: None,
            production_start_year: 2012,
            ..sample_model()
        };

        let feedback = evaluate_model_guess(&target, &guess);

        assert_eq!(feedback.make.status, FieldStatus::Wrong);
        assert_eq!(feedback.make.value, "Peugeot");
        assert_eq!(feedback.generation.status, FieldStatus::Unknown);
        assert_eq!(feedback.generation.value.as_deref(), Some("II"));
        assert_eq!(feedback.production_start_year.status, FieldStatus::Higher);
        assert_eq!(feedback.production_start_year.value, Some(2019));
        assert_eq!(feedback.body_type.status, FieldStatus::Correct);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn null_generation_on_both_sides_is_unknown() {
        let model = CarModel {
            generation: None,
            ..sample_model()
        };
        let feedback = evaluate_model_guess(&model, &model);
        assert_eq!(feedback.generation.status, FieldStatus::Unknown);
        assert_eq!(feedback.generation.value, None);
    }

    // -- variant feedback --

    #[test]
    fn identical_variants_are_correct_everywhere() {
        let variant = sample_variant();
        let feedback = evaluate_variant_guess(&variant, &variant);
        assert!(feedback.is_solved());
    }

    #[test]
    fn effective_start_year_falls_back_to_model_before_comparison() {
        let mut target = sample_variant();
        target.variant.production_start_year = None;
        target.model.production_start_year = 2015;

        let mut guess = sample_variant();
        guess.variant.production_start_year = Some(2012);

        let feedback = evaluate_variant_guess(&target, &guess);

        assert_eq!(
            feedback.model_fields.production_start_year.status,
            FieldStatus::Higher
        );
        assert_eq!(feedback.model_fields.production_start_year.value, Some(2015));
    }

    #[test]
    fn null_target_power_is_unknown_with_null_value() {
        let mut target = sample_variant();
        target.variant.power_hp = None;
        target.variant.fuel_type = FuelType::Electric;
        let guess = sample_variant();

        let feedback = evaluate_variant_guess(&target, &guess);

        assert_eq!(feedback.power_hp.status, FieldStatus::Unknown);
        assert_eq!(feedback.power_hp.value, None);
    }

    #[test]
    fn variant_fields_compare_independently() {
        let mut target = sample_variant();
        target.variant.fuel_type = FuelType::Diesel;
        target.variant.transmission = Transmission::Automatic;
        target.variant.power_hp = Some(150);
        target.variant.engine_type = Some("V6".into());
        target.variant.displacement_cc = Some(2000);
        target.variant.max_speed_kmh = Some(180);
        target.variant.zero_to_hundred_sec = Some(8.5);

        let mut guess = sample_variant();
        guess.variant.engine_type = None;
        guess.variant.displacement_cc = Some(1600);
        guess.variant.max_speed_kmh = Some(210);
        guess.variant.zero_to_hundred_sec = Some(6.5);

        let feedback = evaluate_variant_guess(&target, &guess);

        assert_eq!(feedback.fuel_type.status, FieldStatus::Wrong);
        assert_eq!(feedback.fuel_type.value, Some(FuelType::Diesel));
        assert_eq!(feedback.transmission.status, FieldStatus::Wrong);
        assert_eq!(feedback.power_hp.status, FieldStatus::Higher);
        assert_eq!(feedback.engine_type.status, FieldStatus::Unknown);
        assert_eq!(feedback.engine_type.value.as_deref(), Some("V6"));
        assert_eq!(feedback.displacement_cc.status, FieldStatus::Higher);
        assert_eq!(feedback.max_speed_kmh.status, FieldStatus::Lower);
        assert_eq!(feedback.zero_to_hundred_sec.status, FieldStatus::Higher);
        assert_eq!(feedback.zero_to_hundred_sec.value, Some(8.5));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let target = sample_variant();
        let mut guess = sample_variant();
        guess.variant.power_hp = Some(90);
        assert_eq!(
            evaluate_variant_guess(&target, &guess),
            evaluate_variant_guess(&target, &guess)
        );
    }

    #[test]
    fn variant_feedback_serializes_flat_camel_case() {
        let variant = sample_variant();
        let json = serde_json::to_value(evaluate_variant_guess(&variant, &variant)).unwrap();

        assert_eq!(json["make"]["status"], "correct");
        assert_eq!(json["productionStartYear"]["value"], 2019);
        assert_eq!(json["fuelType"]["value"], "PETROL");
        assert_eq!(json["zeroToHundredSec"]["value"], 9.6);
        assert!(json.get("modelFields").is_none());
    }
}
