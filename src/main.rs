use anyhow::Result;
use log::info;
use std::io;
use volatility_calculator::config::{Config, SeriesSource};
use volatility_calculator::data::series_file::{load_series, read_series};
use volatility_calculator::calculate_volatility;

const DEMO_PRICES: [f64; 6] = [100.0, 102.0, 101.0, 105.0, 107.0, 106.0];

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    info!("options: {:?}", config.options);

    // A returns file takes precedence; prices are then not read at all
    let (prices, returns) = match &config.returns {
        Some(path) => (None, Some(load_series(path)?)),
        None => {
            let prices = match &config.prices {
                SeriesSource::Demo => DEMO_PRICES.to_vec(),
                SeriesSource::Stdin => read_series(io::stdin().lock())?,
                SeriesSource::File(path) => load_series(path)?,
            };
            (Some(prices), None)
        }
    };

    let observations = returns.as_ref().or(prices.as_ref()).map_or(0, Vec::len);
    let kind = if returns.is_some() { "returns" } else { "prices" };

    let per_period = calculate_volatility(
        prices.as_deref(),
        returns.as_deref(),
        &config.options.clone().with_annualize(false),
    )?;
    let annualized = calculate_volatility(
        prices.as_deref(),
        returns.as_deref(),
        &config.options.clone().with_annualize(true),
    )?;

    println!("Observations: {} {}", observations, kind);
    if returns.is_none() {
        println!("Return method: {}", config.options.method);
    }
    println!("Per-period volatility: {:.6}", per_period);
    println!(
        "Annualized volatility ({} periods/year): {:.6}",
        config.options.periods_per_year, annualized
    );

    Ok(())
}
