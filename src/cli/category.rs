use super::ui;
use crate::core::Trip;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the per-category spending report.
pub fn run(trip: &Trip, home_currency: &str) -> Result<()> {
    let totals = trip.totals_by_category();
    let mut categories: Vec<_> = totals.keys().copied().collect();
    categories.sort();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Cash"),
        ui::header_cell("Card"),
        ui::header_cell(&format!("Total ({home_currency})")),
    ]);

    let mut grand_total = 0.0;
    for category in categories {
        let group = totals[&category];
        grand_total += group.total;
        table.add_row(vec![
            Cell::new(category.to_string()),
            ui::amount_cell(group.cash),
            ui::amount_cell(group.card),
            ui::amount_cell(group.total),
        ]);
    }

    println!(
        "{}\n\n{}\n\nTotal spent ({}): {}",
        ui::style_text("Spending by category", ui::StyleType::Title),
        table,
        ui::style_text(home_currency, ui::StyleType::TotalLabel),
        ui::style_text(&format!("{grand_total:.2}"), ui::StyleType::TotalValue),
    );

    Ok(())
}
