use std::fmt;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn missing_api_key() -> Self {
        Error {
            kind: ErrorKind::MissingWeatherApiKey,
        }
    }

    pub(crate) fn missing_slack_token() -> Self {
        Error {
            kind: ErrorKind::MissingSlackToken,
        }
    }
}

/// The kind of an error that can occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    MissingWeatherApiKey,
    MissingSlackToken,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::MissingWeatherApiKey => write!(f, "WEATHER_API_KEY is not set"),
            ErrorKind::MissingSlackToken => write!(f, "SLACK_BOT_TOKEN is not set"),
        }
    }
}
