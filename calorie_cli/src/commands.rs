//! Ledger actions behind the CLI.
//!
//! Each action loads the ledger, applies at most one change, and rewrites the
//! file only when something changed.

use calorie_core::{extract, DayLog, Error, FoodRecord, Ledger, NutritionApi, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Fetch a food and log `quantity` grams of it on `date`
///
/// Returns the record as stored, with the day's accumulated quantity.
pub fn add(
    api: &dyn NutritionApi,
    ledger_path: &Path,
    date: NaiveDate,
    ndbno: &str,
    quantity: f64,
) -> Result<FoodRecord> {
    let detail = api.food_detail(ndbno)?;
    let record = extract(&detail).ok_or_else(|| Error::FoodNotFound(ndbno.to_string()))?;

    let stored = Ledger::update(ledger_path, |ledger| {
        ledger.add_entry(date, ndbno, record, quantity).clone()
    })?;

    tracing::info!(
        "Logged {}g of {} on {} ({}g that day)",
        quantity,
        ndbno,
        date,
        stored.quantity
    );
    Ok(stored)
}

/// Remove a food from `date`
///
/// Returns None, without touching the file, when the food was not logged.
pub fn remove(ledger_path: &Path, date: NaiveDate, ndbno: &str) -> Result<Option<FoodRecord>> {
    let mut ledger = Ledger::load(ledger_path)?;

    let removed = ledger.remove_entry(date, ndbno);
    if removed.is_some() {
        ledger.save(ledger_path)?;
        tracing::info!("Removed {} from {}", ndbno, date);
    } else {
        tracing::debug!("Nothing to remove for {} on {}", ndbno, date);
    }

    Ok(removed)
}

/// Foods logged on `date`
pub fn show(ledger_path: &Path, date: NaiveDate) -> Result<Option<DayLog>> {
    let ledger = Ledger::load(ledger_path)?;
    Ok(ledger.day(date).cloned())
}
