// src/calc/frequency.rs

use crate::error::{Result, VolatilityError};

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Maps a sampling frequency name to its periods per year.
///
/// Accepts `daily`, `weekly`, `monthly` or a positive number such as `365`.
pub fn periods_per_year_for(frequency: &str) -> Result<f64> {
    match frequency.trim().to_ascii_lowercase().as_str() {
        "daily" | "day" => Ok(TRADING_DAYS_PER_YEAR),
        "weekly" | "week" => Ok(WEEKS_PER_YEAR),
        "monthly" | "month" => Ok(MONTHS_PER_YEAR),
        other => match other.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
            _ => Err(VolatilityError::invalid(format!(
                "periods per year must be a positive number or daily/weekly/monthly, got '{}'",
                frequency
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_frequencies() {
        assert_eq!(periods_per_year_for("daily").unwrap(), 252.0);
        assert_eq!(periods_per_year_for(" Weekly ").unwrap(), 52.0);
        assert_eq!(periods_per_year_for("monthly").unwrap(), 12.0);
    }

    #[test]
    fn test_numeric_frequency() {
        assert_eq!(periods_per_year_for("365").unwrap(), 365.0);
        assert!(periods_per_year_for("0").is_err());
        assert!(periods_per_year_for("-12").is_err());
        assert!(periods_per_year_for("hourly").is_err());
    }
}
