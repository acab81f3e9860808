use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::{ExpenseCategory, PaymentMethod, TripKind};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripConfig {
    pub kind: TripKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_budget: f64,
    /// Currency expenses are incurred in at the destination.
    pub currency: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExpenseEntry {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub method: PaymentMethod,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExchangeRateProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub exchange_rate: Option<ExchangeRateProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            exchange_rate: Some(ExchangeRateProviderConfig {
                base_url: "https://api.exchangerate-api.com/v4/latest".to_string(),
            }),
        }
    }
}

fn default_home_currency() -> String {
    "COP".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub trip: TripConfig,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_home_currency")]
    pub home_currency: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "trek", "trek")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
trip:
  kind: international
  start_date: 2025-06-01
  end_date: 2025-06-05
  daily_budget: 200000
  currency: "USD"
expenses:
  - date: 2025-06-01
    amount: 20
    category: food
    method: card
  - date: 2025-06-02
    amount: 15
    category: entertainment
    method: cash
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.trip.kind, TripKind::International);
        assert_eq!(
            config.trip.start_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(config.trip.daily_budget, 200_000.0);
        assert_eq!(config.trip.currency, "USD");
        assert_eq!(config.expenses.len(), 2);
        assert_eq!(config.expenses[0].category, ExpenseCategory::Food);
        assert_eq!(config.expenses[0].method, PaymentMethod::Card);
        assert_eq!(config.expenses[1].amount, 15.0);
        // Defaults kick in when the sections are absent.
        assert_eq!(config.home_currency, "COP");
        assert_eq!(
            config.providers.exchange_rate.unwrap().base_url,
            "https://api.exchangerate-api.com/v4/latest"
        );
    }

    #[test]
    fn test_config_with_provider_override() {
        let yaml_str = r#"
trip:
  kind: domestic
  start_date: 2025-06-01
  end_date: 2025-06-05
  daily_budget: 100000
  currency: "COP"
providers:
  exchange_rate:
    base_url: "http://example.com/rates"
home_currency: "COP"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert!(config.expenses.is_empty());
        assert_eq!(
            config.providers.exchange_rate.unwrap().base_url,
            "http://example.com/rates"
        );
        assert_eq!(config.home_currency, "COP");
    }
}
