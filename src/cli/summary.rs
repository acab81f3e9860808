use super::{budget, category, daily, ui};
use crate::core::Trip;
use anyhow::Result;
use chrono::NaiveDate;

/// Renders all three reports in one go.
pub fn run(trip: &Trip, as_of: NaiveDate, home_currency: &str) -> Result<()> {
    daily::run(trip, home_currency)?;
    ui::print_separator();
    category::run(trip, home_currency)?;
    ui::print_separator();
    budget::run(trip, as_of, home_currency)
}
