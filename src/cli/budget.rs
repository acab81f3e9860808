use super::ui;
use crate::core::Trip;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

/// Renders expected versus actual spend as of a given date. The overspend
/// line is the controller-facing sign: positive means over budget.
pub fn run(trip: &Trip, as_of: NaiveDate, home_currency: &str) -> Result<()> {
    let status = trip.budget_status(as_of);
    let overspend = -status.variance();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(&format!("Budget as of {as_of}")),
        ui::header_cell(&format!("Amount ({home_currency})")),
    ]);

    table.add_row(vec![
        Cell::new("Days elapsed"),
        Cell::new(status.days_elapsed.to_string())
            .set_alignment(comfy_table::CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Expected spend"),
        ui::amount_cell(status.expected_spend),
    ]);
    table.add_row(vec![
        Cell::new("Actual spend"),
        ui::amount_cell(status.actual_spend),
    ]);
    table.add_row(vec![
        Cell::new("Overspend"),
        ui::signed_amount_cell(overspend, overspend > 0.0),
    ]);

    let verdict = if overspend > 0.0 {
        ui::style_text("over budget", ui::StyleType::Error)
    } else {
        ui::style_text("within budget", ui::StyleType::TotalValue)
    };

    println!(
        "{}\n\n{}\n\nThe trip is {} as of {}",
        ui::style_text("Budget comparison", ui::StyleType::Title),
        table,
        verdict,
        as_of,
    );

    Ok(())
}
