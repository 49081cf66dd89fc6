pub mod calculate_volatility;
pub mod frequency;
pub mod returns;
