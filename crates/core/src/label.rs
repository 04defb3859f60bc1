//! Human-readable labels for search suggestions and the "yesterday" reveal.

use crate::car::{CarModel, VariantWithModel};

/// `"Make Model (Gen)"`, generation omitted when absent.
fn base_name(model: &CarModel) -> String {
    match model.generation.as_deref() {
        Some(generation) if !generation.is_empty() => {
            format!("{} {} ({generation})", model.make, model.model)
        }
        _ => format!("{} {}", model.make, model.model),
    }
}

/// Displacement in litres with one decimal, trailing `.0` dropped
/// (`1199` → `1.2`, `2000` → `2`).
pub fn format_litres(displacement_cc: i32) -> String {
    let litres = format!("{:.1}", f64::from(displacement_cc) / 1000.0);
    match litres.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => litres,
    }
}

/// Label for a model: `"Peugeot 208 (II) - France - 2019"`.
pub fn model_label(model: &CarModel) -> String {
    format!(
        "{} - {} - {}",
        base_name(model),
        model.country_of_origin,
        model.production_start_year
    )
}

/// Label for a variant: `"Peugeot 208 (II) I3 1.2 110hp Petrol Manual - 2019"`.
///
/// Detail parts appear only when present; the year is the effective start year.
pub fn variant_label(entity: &VariantWithModel) -> String {
    let variant = &entity.variant;
    let mut parts: Vec<String> = Vec::new();

    if let Some(engine) = variant.engine_type.as_deref().filter(|e| !e.is_empty()) {
        parts.push(engine.to_string());
    }
    if let Some(cc) = variant.displacement_cc.filter(|cc| *cc > 0) {
        parts.push(format_litres(cc));
    }
    if let Some(hp) = variant.power_hp.filter(|hp| *hp > 0) {
        parts.push(format!("{hp}hp"));
    }
    parts.push(variant.fuel_type.display_name().to_string());
    parts.push(variant.transmission.short_name().to_string());

    format!(
        "{} {} - {}",
        base_name(&entity.model),
        parts.join(" "),
        entity.effective_start_year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car::{FuelType, Transmission};
    use crate::testing::{sample_model, sample_variant};

    #[test]
    fn model_label_includes_generation_country_and_year() {
        assert_eq!(model_label(&sample_model()), "Peugeot 208 (II) - France - 2019");
    }

    #[test]
    fn model_label_omits_missing_generation() {
        let model = CarModel {
            make: "Toyota".into(),
            model: "Yaris".into(),
            generation: None,
            country_of_origin: "Japan".into(),
            production_start_year: 2020,
            ..sample_model()
        };
        assert_eq!(model_label(&model), "Toyota Yaris - Japan - 2020");
    }

    #[test]
    fn litres_drop_trailing_zero() {
        assert_eq!(format_litres(1199), "1.2");
        assert_eq!(format_litres(2000), "2");
        assert_eq!(format_litres(1598), "1.6");
    }

    #[test]
    fn variant_label_lists_present_details() {
        assert_eq!(
            variant_label(&sample_variant()),
            "Peugeot 208 (II) I3 1.2 110hp Petrol Manual - 2019"
        );
    }

    #[test]
    fn variant_label_skips_absent_details_and_uses_own_year() {
        let mut entity = sample_variant();
        entity.variant.engine_type = None;
        entity.variant.displacement_cc = None;
        entity.variant.power_hp = None;
        entity.variant.fuel_type = FuelType::Electric;
        entity.variant.transmission = Transmission::Automatic;
        entity.variant.production_start_year = Some(2020);

        assert_eq!(
            variant_label(&entity),
            "Peugeot 208 (II) Electric Auto - 2020"
        );
    }
}
