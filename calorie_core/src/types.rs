//! Core domain types for the calorie tracker.
//!
//! This module defines the persisted ledger model:
//! - Tracked macro-nutrients
//! - Food records as stored per day
//! - The date-keyed ledger and its per-day logs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Macro-nutrients
// ============================================================================

/// One of the macro-nutrients tracked in the ledger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Macronutrient {
    Energy,
    Protein,
    Fat,
    Carbohydrate,
    Fiber,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 5] = [
        Macronutrient::Energy,
        Macronutrient::Protein,
        Macronutrient::Fat,
        Macronutrient::Carbohydrate,
        Macronutrient::Fiber,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Macronutrient::Energy => "Energy",
            Macronutrient::Protein => "Protein",
            Macronutrient::Fat => "Fat",
            Macronutrient::Carbohydrate => "Carbohydrate",
            Macronutrient::Fiber => "Fiber",
        }
    }
}

// ============================================================================
// Stored records
// ============================================================================

/// A food as stored in the ledger for one day
///
/// Nutrient values are kept in the units the database reports them in
/// (per 100 g of food). `quantity` is the grams eaten that day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FoodRecord {
    /// Absent in ledgers written before identifiers were stored per record
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ndbno: String,
    pub name: String,
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
    #[serde(rename = "Qtd")]
    pub quantity: f64,
}

impl FoodRecord {
    /// Value of a tracked macro-nutrient
    pub fn get(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Energy => self.energy,
            Macronutrient::Protein => self.protein,
            Macronutrient::Fat => self.fat,
            Macronutrient::Carbohydrate => self.carbohydrate,
            Macronutrient::Fiber => self.fiber,
        }
    }

    /// Set a tracked macro-nutrient
    pub fn set(&mut self, nutrient: Macronutrient, value: f64) {
        let slot = match nutrient {
            Macronutrient::Energy => &mut self.energy,
            Macronutrient::Protein => &mut self.protein,
            Macronutrient::Fat => &mut self.fat,
            Macronutrient::Carbohydrate => &mut self.carbohydrate,
            Macronutrient::Fiber => &mut self.fiber,
        };
        *slot = value;
    }
}

// ============================================================================
// Ledger
// ============================================================================

/// Foods eaten on one day, keyed by identifier
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLog(pub(crate) BTreeMap<String, FoodRecord>);

impl DayLog {
    pub fn get(&self, ndbno: &str) -> Option<&FoodRecord> {
        self.0.get(ndbno)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (identifier, record) pairs in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FoodRecord)> {
        self.0.iter()
    }
}

/// Macro-nutrient totals for a day, scaled by the grams eaten
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MacroTotals {
    pub grams: f64,
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
}

/// The persisted log: calendar day to the foods eaten that day
///
/// Serialized as `{"YYYY-MM-DD": {"<ndbno>": FoodRecord}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    pub(crate) days: BTreeMap<NaiveDate, DayLog>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
