use super::{Error, Notifier};
use crate::config::Config;
use log::debug;
use serde_json::{json, Value};

/// Slack-style `chat.postMessage` client: bearer token auth, explicit
/// channel, success reported through the `ok` field of the JSON reply.
#[derive(Debug, Clone)]
pub struct ChatNotifier {
    url: String,
    token: String,
    channel: String,
}

impl ChatNotifier {
    pub fn new(url: &str, token: &str, channel: &str) -> ChatNotifier {
        ChatNotifier {
            url: url.to_owned(),
            token: token.to_owned(),
            channel: channel.to_owned(),
        }
    }

    pub fn from_config(config: &Config) -> ChatNotifier {
        Self::new(&config.slack_url, &config.slack_token, &config.slack_channel)
    }
}

impl Notifier for ChatNotifier {
    fn name(&self) -> &'static str {
        "Slack"
    }

    fn send(&self, agent: &ureq::Agent, message: &str) -> Result<(), Error> {
        let result = agent
            .post(&self.url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .send_json(json!({ "channel": self.channel, "text": message }));

        // The API reports most failures in the body, so a 4xx/5xx reply is
        // still inspected.
        let resp = match result {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => return Err(e.into()),
        };

        let status = resp.status();
        let body = resp.into_string()?;
        debug!("{} replied with status {}: {}", self.name(), status, body);

        let reply = match serde_json::from_str::<Value>(&body) {
            Ok(reply) => reply,
            Err(_) => return Err(Error::not_json(status, body)),
        };

        if reply.get("ok").and_then(Value::as_bool) != Some(true) {
            return Err(Error::rejected(body));
        }
        Ok(())
    }
}
