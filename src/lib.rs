mod config;
mod notify;
mod weather;

pub use config::{Args, Config, DEFAULT_LOG_LEVEL};
use log::{info, warn};
pub use notify::{ChatNotifier, Notifier, WebhookNotifier};
use std::fmt;
pub use weather::{build_message, get_weather, TemperatureUnits, WeatherReading};

pub mod error {
    pub use crate::config::{Error as ConfigError, ErrorKind as ConfigErrorKind};
    pub use crate::notify::{Error as NotifyError, ErrorKind as NotifyErrorKind};
    pub use crate::weather::{Error as WeatherError, ErrorKind as WeatherErrorKind};
    pub use crate::weather::{ReadingError, ReadingErrorKind};
}

/// What happened to one notification channel during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The channel is not configured.
    Skipped,
    Failed,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Delivery::Sent => write!(f, "sent"),
            Delivery::Skipped => write!(f, "skipped"),
            Delivery::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a whole run. Failures are already logged by the time this is
/// returned; none of them affect the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    FetchFailed,
    MessageFailed,
    Completed { webhook: Delivery, chat: Delivery },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::FetchFailed => write!(f, "no weather data"),
            Outcome::MessageFailed => write!(f, "no message"),
            Outcome::Completed { webhook, chat } => {
                write!(f, "Discord: {}, Slack: {}", webhook, chat)
            }
        }
    }
}

pub fn new_agent(config: &Config) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(config.request_timeout)
        .build()
}

/// Fetch the weather once, format it, and hand it to each configured channel.
/// A failed channel never stops the next one from being tried.
pub fn run(config: &Config) -> Outcome {
    let agent = new_agent(config);

    let weather = match weather::get_weather(&agent, config) {
        Ok(w) => w,
        Err(e) => {
            warn!("Error getting weather: {}. Nothing to send", e);
            return Outcome::FetchFailed;
        }
    };

    let message = match weather::build_message(&weather, &config.city, config.units) {
        Ok(m) => m,
        Err(e) => {
            warn!("Error building message: {}. Nothing to send", e);
            return Outcome::MessageFailed;
        }
    };
    info!("built message for {}", config.city);

    let webhook = match WebhookNotifier::from_config(config) {
        Some(notifier) => deliver(&agent, &notifier, &message),
        None => {
            info!("DISCORD_WEBHOOK_URL is not set, skipping Discord");
            Delivery::Skipped
        }
    };

    let chat = deliver(&agent, &ChatNotifier::from_config(config), &message);

    Outcome::Completed { webhook, chat }
}

fn deliver<N: Notifier>(agent: &ureq::Agent, notifier: &N, message: &str) -> Delivery {
    match notifier.send(agent, message) {
        Ok(()) => {
            info!("Sent weather to {}", notifier.name());
            Delivery::Sent
        }
        Err(e) => {
            warn!("Error sending weather to {}: {}", notifier.name(), e);
            Delivery::Failed
        }
    }
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

// ureq's own Display leads with the request URL, which carries the weather API
// key in its query and is the only credential of a webhook. Keep it out.
pub(crate) fn describe_transport(t: &ureq::Transport) -> String {
    let mut detail = t.kind().to_string();
    if let Some(message) = t.message() {
        detail.push_str(": ");
        detail.push_str(message);
    }
    if let Some(source) = std::error::Error::source(t) {
        detail.push_str(": ");
        detail.push_str(&source.to_string());
    }

    match t.url() {
        Some(url) => detail.replace(url.as_str(), "<redacted>"),
        None => detail,
    }
}
