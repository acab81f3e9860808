use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::CurrencyRateProvider;

/// Rate provider backed by the exchangerate-api.com "latest" endpoint. A GET
/// on `{base_url}/{from}` returns every rate relative to `from`.
pub struct ExchangeRateProvider {
    base_url: String,
}

impl ExchangeRateProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl CurrencyRateProvider for ExchangeRateProvider {
    #[instrument(
        name = "RateFetch",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let url = format!("{}/{}", self.base_url, from);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("trek/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for currency: {} URL: {}", e, from, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency: {}",
                response.status(),
                from
            ));
        }

        let text = response.text().await?;
        let data: RatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", from, e))?;

        data.rates
            .get(to)
            .copied()
            .ok_or_else(|| anyhow!("No rate found for {} in {} rates", to, from))
    }
}
