mod error;
mod payload;
mod reading;
mod units;

use crate::config::Config;
pub use error::{Error, ErrorKind, ReadingError, ReadingErrorKind};
use log::debug;
pub use reading::{build_message, WeatherReading};
use serde_json::Value;
pub use units::TemperatureUnits;

// Descriptions come back in Japanese.
const LANGUAGE: &'static str = "ja";

/// Fetch the current weather for the configured city. The body is only
/// checked for being JSON here; field extraction happens in `build_message`.
pub fn get_weather(agent: &ureq::Agent, config: &Config) -> Result<Value, Error> {
    debug!(
        "requesting current weather for {} from {}",
        config.city, config.weather_url
    );

    let resp = agent
        .get(&config.weather_url)
        .query("q", &config.city)
        .query("appid", &config.weather_api_key)
        .query("lang", LANGUAGE)
        .query("units", config.units.as_query_value())
        .call()?;
    if !crate::is_success(resp.status()) {
        return Err(Error::status(resp.status()));
    }

    let body = resp.into_string()?;
    let weather = serde_json::from_str::<Value>(&body)?;

    Ok(weather)
}
