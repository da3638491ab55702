//! Projection of a food report onto the tracked macro-nutrients.

use crate::usda::FoodDetail;
use crate::{FoodRecord, Macronutrient};

/// Database nutrient codes of the tracked macro-nutrients
pub const TRACKED_NUTRIENTS: [(&str, Macronutrient); 5] = [
    ("208", Macronutrient::Energy),
    ("203", Macronutrient::Protein),
    ("204", Macronutrient::Fat),
    ("205", Macronutrient::Carbohydrate),
    ("291", Macronutrient::Fiber),
];

/// Macro-nutrient tracked under a database nutrient code, if any
pub fn tracked_nutrient(code: &str) -> Option<Macronutrient> {
    TRACKED_NUTRIENTS
        .iter()
        .find(|(tracked, _)| *tracked == code.trim())
        .map(|(_, nutrient)| *nutrient)
}

/// Reduce a food report to a ledger record
///
/// Uses the first food in the report. Returns None when the report holds no
/// food (unknown identifier). A tracked nutrient whose value does not parse
/// is logged and left at zero. The returned quantity is zero.
pub fn extract(detail: &FoodDetail) -> Option<FoodRecord> {
    let food = &detail.foods.first()?.food;

    let mut record = FoodRecord {
        ndbno: food.desc.ndbno.clone(),
        name: food.desc.name.clone(),
        ..Default::default()
    };

    for entry in &food.nutrients {
        let Some(nutrient) = tracked_nutrient(&entry.nutrient_id) else {
            continue;
        };

        match entry.value.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => record.set(nutrient, value),
            _ => tracing::warn!(
                "Ignoring unparseable {} value {:?} for {}",
                nutrient.label(),
                entry.value,
                food.desc.ndbno
            ),
        }
    }

    Some(record)
}
