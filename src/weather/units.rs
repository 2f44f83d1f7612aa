use std::fmt;
use std::str::FromStr;

const UNITS_IMPERIAL: &'static str = "imperial";
const UNITS_METRIC: &'static str = "metric";
const UNITS_STANDARD: &'static str = "standard";

/// Unit system requested from the provider via the `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureUnits {
    Imperial,
    Metric,
    Standard,
}

impl TemperatureUnits {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Imperial => UNITS_IMPERIAL,
            Self::Metric => UNITS_METRIC,
            Self::Standard => UNITS_STANDARD,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Imperial => "℉",
            Self::Metric => "℃",
            Self::Standard => "K",
        }
    }
}

impl Default for TemperatureUnits {
    fn default() -> Self {
        Self::Metric
    }
}

impl fmt::Display for TemperatureUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for TemperatureUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<TemperatureUnits, Self::Err> {
        match s {
            UNITS_IMPERIAL => Ok(TemperatureUnits::Imperial),
            UNITS_METRIC => Ok(TemperatureUnits::Metric),
            UNITS_STANDARD => Ok(TemperatureUnits::Standard),
            _ => Err(format!(
                "unrecognized temperature units: {} (expected {}, {} or {})",
                s, UNITS_METRIC, UNITS_IMPERIAL, UNITS_STANDARD
            )),
        }
    }
}
