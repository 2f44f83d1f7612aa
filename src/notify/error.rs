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

    pub(crate) fn status(code: u16, body: String) -> Self {
        Error {
            kind: ErrorKind::Status { code, body },
        }
    }

    pub(crate) fn not_json(status: u16, body: String) -> Self {
        Error {
            kind: ErrorKind::NotJson { status, body },
        }
    }

    pub(crate) fn rejected(body: String) -> Self {
        Error {
            kind: ErrorKind::Rejected(body),
        }
    }
}

/// The kind of an error that can occur while delivering a message.
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Non-2xx response. `body` is whatever the endpoint sent back.
    Status { code: u16, body: String },
    /// Connection, DNS or timeout failure, described without the request URL.
    Transport(String),
    Body(std::io::Error),
    NotJson { status: u16, body: String },
    /// The endpoint answered with JSON whose `ok` flag was not true.
    Rejected(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ErrorKind::Status { code, ref body } => {
                write!(f, "endpoint returned status {}: {}", code, body)
            }
            ErrorKind::Transport(ref err) => write!(f, "request failed: {}", err),
            ErrorKind::Body(ref err) => write!(f, "could not read response: {}", err),
            ErrorKind::NotJson { status, ref body } => write!(
                f,
                "response is not JSON (status {}, body: {})",
                status, body
            ),
            ErrorKind::Rejected(ref body) => write!(f, "API error: {}", body),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, resp) => {
                Error::status(code, resp.into_string().unwrap_or_default())
            }
            ureq::Error::Transport(t) => Error {
                kind: ErrorKind::Transport(crate::describe_transport(&t)),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Body(e),
        }
    }
}
