use super::error::ReadingError;
use super::payload::CurrentWeather;
use super::TemperatureUnits;
use serde::Deserialize;
use serde_json::{Number, Value};

/// The handful of values the notification needs, pulled out of a
/// current-weather payload.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub city_name: String,
    pub description: String,
    pub temp_max: Number,
    pub temp_min: Number,
}

impl WeatherReading {
    /// `fallback_city` is used when the provider omits the display name.
    pub fn from_payload(payload: &Value, fallback_city: &str) -> Result<Self, ReadingError> {
        let current = CurrentWeather::deserialize(payload)?;

        let description = current
            .weather
            .and_then(|w| w.into_iter().next())
            .and_then(|d| d.description)
            .ok_or(ReadingError::missing("weather[0].description"))?;

        let main = current.main.ok_or(ReadingError::missing("main"))?;
        let temp_max = main
            .temp_max
            .ok_or(ReadingError::missing("main.temp_max"))?;
        let temp_min = main
            .temp_min
            .ok_or(ReadingError::missing("main.temp_min"))?;

        Ok(WeatherReading {
            city_name: current.name.unwrap_or_else(|| fallback_city.to_owned()),
            description,
            temp_max,
            temp_min,
        })
    }

    // Numbers are printed as the provider sent them, so 20.1 stays "20.1".
    pub fn message(&self, units: TemperatureUnits) -> String {
        let symbol = units.symbol();
        format!(
            "{}の今日の天気:{}\n最高気温:{}{}\n最低気温:{}{}",
            self.city_name, self.description, self.temp_max, symbol, self.temp_min, symbol
        )
    }
}

/// Build the notification text for a current-weather payload.
pub fn build_message(
    payload: &Value,
    fallback_city: &str,
    units: TemperatureUnits,
) -> Result<String, ReadingError> {
    WeatherReading::from_payload(payload, fallback_city).map(|r| r.message(units))
}
