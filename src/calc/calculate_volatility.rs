// src/calc/calculate_volatility.rs

use super::frequency::TRADING_DAYS_PER_YEAR;
use super::returns::{derive_returns, drop_non_finite, ReturnMethod};
use crate::error::{Result, VolatilityError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Options for [`calculate_volatility`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityOptions {
    /// How returns are derived from prices. Ignored when returns are supplied.
    pub method: ReturnMethod,
    /// Delta degrees of freedom: 1 = sample estimator, 0 = population.
    pub ddof: i64,
    /// Multiply the result by sqrt(periods_per_year).
    pub annualize: bool,
    /// 252 (daily), 52 (weekly), 12 (monthly), etc.
    pub periods_per_year: f64,
    /// Reject prices <= 0 before deriving returns.
    pub check_positive: bool,
    /// Drop NaN/inf returns before computing the deviation.
    pub dropna: bool,
}

impl Default for VolatilityOptions {
    fn default() -> Self {
        VolatilityOptions {
            method: ReturnMethod::Log,
            ddof: 1,
            annualize: true,
            periods_per_year: TRADING_DAYS_PER_YEAR,
            check_positive: true,
            dropna: true,
        }
    }
}

impl VolatilityOptions {
    pub fn with_method(mut self, method: ReturnMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_ddof(mut self, ddof: i64) -> Self {
        self.ddof = ddof;
        self
    }

    pub fn with_annualize(mut self, annualize: bool) -> Self {
        self.annualize = annualize;
        self
    }

    pub fn with_periods_per_year(mut self, periods_per_year: f64) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    pub fn with_check_positive(mut self, check_positive: bool) -> Self {
        self.check_positive = check_positive;
        self
    }

    pub fn with_dropna(mut self, dropna: bool) -> Self {
        self.dropna = dropna;
        self
    }
}

/// Standard deviation of `values` with `ddof` delta degrees of freedom.
///
/// The divisor is `max(n - ddof, 0)`; when it reaches zero the result is NaN
/// (no spread) or +inf, following IEEE division. A negative `ddof` widens it.
pub fn std_dev(values: &[f64], ddof: i64) -> f64 {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();

    let divisor = (n as i64).saturating_sub(ddof).max(0);
    if divisor == 0 {
        warn!("degrees of freedom <= 0 (n = {}, ddof = {})", n, ddof);
    }

    (sum_sq / divisor as f64).sqrt()
}

/// Volatility of a price or return series.
///
/// When `returns` is `Some` it is used as is and `prices` is never looked at.
/// Otherwise returns are derived from `prices` with `options.method`.
pub fn calculate_volatility(
    prices: Option<&[f64]>,
    returns: Option<&[f64]>,
    options: &VolatilityOptions,
) -> Result<f64> {
    let rets: Vec<f64> = match returns {
        Some(returns) => returns.to_vec(),
        None => {
            let prices = prices
                .ok_or_else(|| VolatilityError::invalid("must supply prices or returns"))?;
            derive_returns(prices, options.method, options.check_positive)?
        }
    };

    let rets = if options.dropna {
        drop_non_finite(&rets)
    } else {
        rets
    };

    if rets.is_empty() {
        return Err(VolatilityError::invalid("no valid returns after cleaning"));
    }

    let mut vol = std_dev(&rets, options.ddof);

    if options.annualize {
        vol *= options.periods_per_year.sqrt();
    }

    debug!(
        "volatility over {} returns (ddof = {}, annualize = {}): {}",
        rets.len(),
        options.ddof,
        options.annualize,
        vol
    );

    Ok(vol)
}

pub fn volatility_from_prices(prices: &[f64], options: &VolatilityOptions) -> Result<f64> {
    calculate_volatility(Some(prices), None, options)
}

pub fn volatility_from_returns(returns: &[f64], options: &VolatilityOptions) -> Result<f64> {
    calculate_volatility(None, Some(returns), options)
}
