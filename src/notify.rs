use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::config::NotifierConfig;

const WELCOME_SUBJECT: &str = "Welcome to UserHub";
const WELCOME_BODY: &str = "Welcome to UserHub, we are glad to have you on board!";

/// Outbound email message handed to the notification collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn welcome(to: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: WELCOME_SUBJECT.to_string(),
            body: WELCOME_BODY.to_string(),
        }
    }
}

/// One-way publish boundary. Delivery guarantees belong to the collaborator
/// behind it; callers treat the result as advisory.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, message: &EmailMessage) -> anyhow::Result<()>;
}

/// Publishes messages to the notification service over HTTP.
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpNotifier {
    pub fn new(config: &NotifierConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn publish(&self, message: &EmailMessage) -> anyhow::Result<()> {
        debug!(to = %message.to, subject = %message.subject, "publishing email");
        self.client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_message_targets_recipient() {
        let msg = EmailMessage::welcome("someone@example.com");
        assert_eq!(msg.to, "someone@example.com");
        assert!(msg.subject.contains("Welcome"));
        assert!(!msg.body.is_empty());
    }
}
