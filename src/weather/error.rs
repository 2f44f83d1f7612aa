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

    pub(crate) fn status(code: u16) -> Self {
        Error {
            kind: ErrorKind::Status(code),
        }
    }
}

/// The kind of an error that can occur while fetching the current weather.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provider answered with a non-2xx status.
    Status(u16),
    /// Connection, DNS or timeout failure, described without the request URL.
    Transport(String),
    Body(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Status(code) => write!(f, "weather API returned status {}", code),
            ErrorKind::Transport(ref err) => write!(f, "weather request failed: {}", err),
            ErrorKind::Body(ref err) => write!(f, "could not read weather response: {}", err),
            ErrorKind::Json(ref err) => write!(f, "weather response is not JSON: {}", err),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let kind = match e {
            ureq::Error::Status(code, _) => ErrorKind::Status(code),
            ureq::Error::Transport(t) => ErrorKind::Transport(crate::describe_transport(&t)),
        };
        Error { kind }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Body(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Json(e),
        }
    }
}

/// Why a payload could not be turned into a message.
#[derive(Debug)]
pub struct ReadingError {
    kind: ReadingErrorKind,
}

impl std::error::Error for ReadingError {}

impl ReadingError {
    pub fn kind(&self) -> &ReadingErrorKind {
        &self.kind
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        ReadingError {
            kind: ReadingErrorKind::MissingField(field),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ReadingErrorKind {
    MissingField(&'static str),
    /// A field is present but has the wrong type.
    Malformed(serde_json::Error),
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ReadingErrorKind::MissingField(field) => {
                write!(f, "weather payload has no `{}`", field)
            }
            ReadingErrorKind::Malformed(ref err) => {
                write!(f, "weather payload is malformed: {}", err)
            }
        }
    }
}

impl From<serde_json::Error> for ReadingError {
    fn from(e: serde_json::Error) -> Self {
        ReadingError {
            kind: ReadingErrorKind::Malformed(e),
        }
    }
}
