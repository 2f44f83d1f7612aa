use super::{Error, Notifier};
use crate::config::Config;
use serde_json::json;

/// Posts `{"content": <message>}` to a pre-shared webhook URL (Discord style).
/// The URL is the only credential.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: &str) -> WebhookNotifier {
        WebhookNotifier {
            url: url.to_owned(),
        }
    }

    /// `None` when no webhook URL is configured.
    pub fn from_config(config: &Config) -> Option<WebhookNotifier> {
        config.discord_webhook_url.as_deref().map(Self::new)
    }
}

impl Notifier for WebhookNotifier {
    fn name(&self) -> &'static str {
        "Discord"
    }

    fn send(&self, agent: &ureq::Agent, message: &str) -> Result<(), Error> {
        let resp = agent
            .post(&self.url)
            .send_json(json!({ "content": message }))?;

        let status = resp.status();
        if !crate::is_success(status) {
            return Err(Error::status(status, resp.into_string()?));
        }
        Ok(())
    }
}
