pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod log;
pub mod providers;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use controller::TripController;
use core::{Clock, Conversion, SystemClock};
use tracing::{debug, info, warn};

pub enum AppCommand {
    Summary,
    Daily,
    Category,
    Budget { as_of: Option<NaiveDate> },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Trip expense tracker starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let base_url = config
        .providers
        .exchange_rate
        .as_ref()
        .map_or("https://api.exchangerate-api.com/v4/latest", |p| {
            &p.base_url
        });
    let rate_provider = providers::exchange_rate::ExchangeRateProvider::new(base_url);

    let today = SystemClock.today();
    let mut controller = TripController::new(
        Box::new(rate_provider),
        Box::new(SystemClock),
        &config.home_currency,
    );
    controller.start_trip(
        config.trip.kind,
        config.trip.start_date,
        config.trip.end_date,
        config.trip.daily_budget,
        &config.trip.currency,
    )?;

    let pb = cli::ui::new_progress_bar(config.expenses.len() as u64, true);
    pb.set_message("Registering expenses...");

    for entry in &config.expenses {
        let conversion = controller
            .register_expense(entry.date, entry.amount, entry.category, entry.method)
            .await?;
        if let Conversion::Unconverted { reason, .. } = &conversion {
            warn!(date = %entry.date, amount = entry.amount, reason = %reason, "Expense stored unconverted");
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let trip = controller.trip().context("No trip was started")?;

    match command {
        AppCommand::Summary => cli::summary::run(trip, today, &config.home_currency),
        AppCommand::Daily => cli::daily::run(trip, &config.home_currency),
        AppCommand::Category => cli::category::run(trip, &config.home_currency),
        AppCommand::Budget { as_of } => {
            cli::budget::run(trip, as_of.unwrap_or(today), &config.home_currency)
        }
    }
}
