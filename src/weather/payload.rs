use serde::Deserialize;
use serde_json::Number;

// Current-weather response shape. Every field is optional so that a missing
// one surfaces as a `ReadingError` naming it rather than as a serde error.

#[derive(Deserialize, Debug, Default)]
pub struct CurrentWeather {
    pub weather: Option<Vec<Description>>,
    pub main: Option<Main>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Description {
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Main {
    pub temp_min: Option<Number>,
    pub temp_max: Option<Number>,
}
