//! Currency rate lookup seam and the conversion outcome type.

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;
}

/// Outcome of converting an amount into the home currency. A failed lookup
/// degrades to the original amount, but unlike a bare number the caller can
/// still tell the two cases apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Converted { amount: f64, rate: f64 },
    Unconverted { amount: f64, reason: String },
}

impl Conversion {
    /// The amount to store, whichever way the conversion went.
    pub fn amount(&self) -> f64 {
        match self {
            Conversion::Converted { amount, .. } => *amount,
            Conversion::Unconverted { amount, .. } => *amount,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Conversion::Converted { .. })
    }
}

/// Converts `amount` from `from` to `to`. Equal currencies skip the lookup
/// entirely; a failed lookup is logged and keeps the original amount.
pub async fn convert(
    provider: &dyn CurrencyRateProvider,
    amount: f64,
    from: &str,
    to: &str,
) -> Conversion {
    if from == to {
        return Conversion::Converted { amount, rate: 1.0 };
    }

    match provider.get_rate(from, to).await {
        Ok(rate) => Conversion::Converted {
            amount: amount * rate,
            rate,
        },
        Err(e) => {
            warn!(error = %e, from, to, "Rate lookup failed, keeping original amount");
            Conversion::Unconverted {
                amount,
                reason: e.to_string(),
            }
        }
    }
}
