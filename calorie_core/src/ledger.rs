//! Ledger accumulation.
//!
//! Folds food entries into the date-keyed ledger. Every operation takes the
//! day explicitly; resolving "today" is left to the caller.

use crate::{DayLog, FoodRecord, Ledger, MacroTotals};
use chrono::NaiveDate;

impl Ledger {
    /// Record `quantity` grams of a food on `date`
    ///
    /// The first addition of an identifier on a day stores `record` with its
    /// quantity set. Later additions on the same day only add to the quantity;
    /// the name and nutrient values captured the first time are kept.
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        ndbno: &str,
        mut record: FoodRecord,
        quantity: f64,
    ) -> &FoodRecord {
        let day = self.days.entry(date).or_default();

        let stored = day
            .0
            .entry(ndbno.to_string())
            .and_modify(|existing| {
                existing.quantity += quantity;
                tracing::debug!(
                    "Accumulated {}g of {} on {} (now {}g)",
                    quantity,
                    ndbno,
                    date,
                    existing.quantity
                );
            })
            .or_insert_with(|| {
                record.ndbno = ndbno.to_string();
                record.quantity = quantity;
                tracing::debug!("New entry {} on {} with {}g", ndbno, date, quantity);
                record
            });

        stored
    }

    /// Remove a food from a day
    ///
    /// Returns the removed record, or None when the day or the food was not
    /// logged. A day left without entries is dropped from the ledger.
    pub fn remove_entry(&mut self, date: NaiveDate, ndbno: &str) -> Option<FoodRecord> {
        let day = self.days.get_mut(&date)?;
        let removed = day.0.remove(ndbno)?;

        if day.is_empty() {
            self.days.remove(&date);
            tracing::debug!("Dropped empty day {}", date);
        }

        Some(removed)
    }

    /// Foods logged on `date`, if any
    pub fn day(&self, date: NaiveDate) -> Option<&DayLog> {
        self.days.get(&date)
    }
}

impl DayLog {
    /// Sum the day's macro-nutrients, scaling each food by grams eaten
    ///
    /// Database values are per 100 g of food.
    pub fn totals(&self) -> MacroTotals {
        self.iter()
            .fold(MacroTotals::default(), |mut totals, (_, food)| {
                let factor = food.quantity / 100.0;
                totals.grams += food.quantity;
                totals.energy += food.energy * factor;
                totals.protein += food.protein * factor;
                totals.fat += food.fat * factor;
                totals.carbohydrate += food.carbohydrate * factor;
                totals.fiber += food.fiber * factor;
                totals
            })
    }
}
