mod error;

use crate::weather::TemperatureUnits;
pub use error::{Error, ErrorKind};
use log::warn;
use simplelog::LevelFilter;
use std::convert::TryFrom;
use std::time::Duration;
use structopt::StructOpt;

pub const DEFAULT_CITY: &'static str = "Ishioka,JP";
pub const DEFAULT_WEATHER_URL: &'static str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_SLACK_URL: &'static str = "https://slack.com/api/chat.postMessage";
pub const DEFAULT_SLACK_CHANNEL: &'static str = "#お天気情報";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Command line and environment surface. Every option falls back to its
/// environment variable, so the binary can be driven entirely from cron.
///
/// Units, timeout and log level are kept as raw strings: an unparsable value
/// falls back to its default with a warning instead of failing the run.
#[derive(StructOpt, Debug)]
#[structopt(name = "weather_notifier")]
pub struct Args {
    #[structopt(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,

    #[structopt(long, env = "WEATHER_CITY", default_value = DEFAULT_CITY)]
    pub city: String,

    #[structopt(long, env = "WEATHER_UNITS")]
    pub units: Option<String>,

    #[structopt(long, env = "WEATHER_API_URL", default_value = DEFAULT_WEATHER_URL)]
    pub weather_url: String,

    #[structopt(long, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    pub slack_token: Option<String>,

    #[structopt(long, env = "SLACK_CHANNEL", default_value = DEFAULT_SLACK_CHANNEL)]
    pub slack_channel: String,

    #[structopt(long, env = "SLACK_API_URL", default_value = DEFAULT_SLACK_URL)]
    pub slack_url: String,

    #[structopt(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub discord_webhook_url: Option<String>,

    #[structopt(long, env = "REQUEST_TIMEOUT_SECS")]
    pub timeout_secs: Option<String>,

    #[structopt(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Level for the terminal logger. `Err` hands back the value that did not
    /// parse so it can be reported once the logger is up.
    pub fn log_level(&self) -> Result<LevelFilter, &str> {
        match self.log_level.as_deref().filter(|v| !v.is_empty()) {
            None => Ok(DEFAULT_LOG_LEVEL),
            Some(v) => v.parse().map_err(|_| v),
        }
    }
}

/// Settings for a single run. Built once in `main` and borrowed by every step.
#[derive(Debug, Clone)]
pub struct Config {
    pub weather_api_key: String,
    pub city: String,
    pub units: TemperatureUnits,
    pub weather_url: String,
    pub slack_token: String,
    pub slack_channel: String,
    pub slack_url: String,
    pub discord_webhook_url: Option<String>,
    pub request_timeout: Duration,
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let weather_api_key = present(args.weather_api_key).ok_or_else(Error::missing_api_key)?;
        let slack_token = present(args.slack_token).ok_or_else(Error::missing_slack_token)?;

        Ok(Config {
            weather_api_key,
            city: args.city,
            units: parse_units(args.units),
            weather_url: args.weather_url,
            slack_token,
            slack_channel: args.slack_channel,
            slack_url: args.slack_url,
            discord_webhook_url: present(args.discord_webhook_url),
            request_timeout: parse_timeout(args.timeout_secs),
        })
    }
}

// An exported-but-empty variable counts as unset.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_units(value: Option<String>) -> TemperatureUnits {
    match present(value) {
        None => TemperatureUnits::default(),
        Some(v) => v.parse().unwrap_or_else(|e| {
            warn!("{}, using {}", e, TemperatureUnits::default());
            TemperatureUnits::default()
        }),
    }
}

fn parse_timeout(value: Option<String>) -> Duration {
    match present(value) {
        None => DEFAULT_TIMEOUT,
        Some(v) => match v.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!(
                    "REQUEST_TIMEOUT_SECS {:?} is not a positive number of seconds, using {}",
                    v,
                    DEFAULT_TIMEOUT.as_secs()
                );
                DEFAULT_TIMEOUT
            }
        },
    }
}
