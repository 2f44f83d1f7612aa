mod chat;
mod error;
mod webhook;

pub use chat::ChatNotifier;
pub use error::{Error, ErrorKind};
pub use webhook::WebhookNotifier;

/// A destination for the weather message. Both channels report failure the
/// same way; the caller decides what to log.
pub trait Notifier {
    /// Human readable channel name used in log lines.
    fn name(&self) -> &'static str;

    fn send(&self, agent: &ureq::Agent, message: &str) -> Result<(), Error>;
}
