//! Volatility (standard deviation of returns) of a price series, optionally annualized.

pub mod calc;
pub mod config;
pub mod data;
pub mod error;

pub use calc::calculate_volatility::{
    calculate_volatility, std_dev, volatility_from_prices, volatility_from_returns,
    VolatilityOptions,
};
pub use calc::frequency::{
    periods_per_year_for, MONTHS_PER_YEAR, TRADING_DAYS_PER_YEAR, WEEKS_PER_YEAR,
};
pub use calc::returns::ReturnMethod;
pub use error::{Result, VolatilityError};
