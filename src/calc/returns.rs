// src/calc/returns.rs

use crate::error::{Result, VolatilityError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How period-over-period returns are derived from prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnMethod {
    /// ln(P_t) - ln(P_{t-1})
    #[default]
    Log,
    /// (P_t - P_{t-1}) / P_{t-1}
    Simple,
}

impl FromStr for ReturnMethod {
    type Err = VolatilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "log" => Ok(ReturnMethod::Log),
            "simple" => Ok(ReturnMethod::Simple),
            other => Err(VolatilityError::invalid(format!(
                "method must be 'log' or 'simple', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ReturnMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnMethod::Log => write!(f, "log"),
            ReturnMethod::Simple => write!(f, "simple"),
        }
    }
}

/// Derives the return series from `prices`.
///
/// The positivity check runs before the length check, so `[-1.0]` reports the
/// non-positive price rather than the short series.
pub fn derive_returns(
    prices: &[f64],
    method: ReturnMethod,
    check_positive: bool,
) -> Result<Vec<f64>> {
    if check_positive && prices.iter().any(|&p| p <= 0.0) {
        return Err(VolatilityError::invalid(
            "prices must be > 0 to compute log or simple returns",
        ));
    }

    if prices.len() < 2 {
        return Err(VolatilityError::invalid(format!(
            "at least 2 prices are needed to compute returns, got {}",
            prices.len()
        )));
    }

    let returns: Vec<f64> = match method {
        ReturnMethod::Log => prices
            .windows(2)
            .map(|w| w[1].ln() - w[0].ln())
            .collect(),
        ReturnMethod::Simple => prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect(),
    };

    debug!("derived {} {} returns from {} prices", returns.len(), method, prices.len());
    Ok(returns)
}

/// Removes NaN and +/-inf returns, keeping the order of what remains.
pub fn drop_non_finite(returns: &[f64]) -> Vec<f64> {
    let cleaned: Vec<f64> = returns.iter().copied().filter(|r| r.is_finite()).collect();

    let dropped = returns.len() - cleaned.len();
    if dropped > 0 {
        warn!("dropped {} non-finite returns out of {}", dropped, returns.len());
    }

    cleaned
}
