// src/config.rs

use crate::calc::calculate_volatility::VolatilityOptions;
use crate::calc::frequency::periods_per_year_for;
use crate::calc::returns::ReturnMethod;
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Where the CLI reads its series from.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesSource {
    /// Built-in demo price series.
    Demo,
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prices: SeriesSource,
    /// Returns file; when set, prices are not read.
    pub returns: Option<PathBuf>,
    pub options: VolatilityOptions,
}

impl Config {
    /// Loads the configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(&env::vars().collect::<HashMap<_, _>>())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let prices = match get("PRICES_FILE") {
            None => SeriesSource::Demo,
            Some("-") => SeriesSource::Stdin,
            Some(path) => SeriesSource::File(PathBuf::from(path)),
        };
        let returns = get("RETURNS_FILE").map(PathBuf::from);

        let defaults = VolatilityOptions::default();

        // The method only matters when returns are derived from prices
        let method = match get("VOL_METHOD") {
            Some(m) if returns.is_none() => m.parse::<ReturnMethod>().context("VOL_METHOD")?,
            _ => defaults.method,
        };

        let ddof = match get("VOL_DDOF") {
            Some(d) => d
                .parse::<i64>()
                .with_context(|| format!("VOL_DDOF must be an integer, got '{}'", d))?,
            None => defaults.ddof,
        };

        let periods_per_year = match get("PERIODS_PER_YEAR") {
            Some(p) => periods_per_year_for(p).context("PERIODS_PER_YEAR")?,
            None => defaults.periods_per_year,
        };

        let check_positive = match get("CHECK_POSITIVE") {
            Some(v) => parse_bool(v).context("CHECK_POSITIVE")?,
            None => defaults.check_positive,
        };

        let dropna = match get("DROPNA") {
            Some(v) => parse_bool(v).context("DROPNA")?,
            None => defaults.dropna,
        };

        Ok(Config {
            prices,
            returns,
            options: defaults
                .with_method(method)
                .with_ddof(ddof)
                .with_periods_per_year(periods_per_year)
                .with_check_positive(check_positive)
                .with_dropna(dropna),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("expected a boolean, got '{}'", value)),
    }
}
