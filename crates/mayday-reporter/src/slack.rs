//! Slack incoming-webhook delivery
//!
//! Delivery is fire and forget: the response status and body are discarded,
//! and callers are expected to log (not propagate) send errors.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use mayday_core::ReporterConfig;

use crate::error::NotifierInitError;

const CLIENT_USER_AGENT: &str = "Mayday-Reporter/1.0";
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Message payload posted as the single `payload` form field.
///
/// Field order is part of the wire shape.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
    pub text: String,
}

#[derive(Debug)]
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
    channel: String,
    user: String,
    icon: String,
}

impl SlackNotifier {
    /// Build a notifier from the reporter configuration.
    ///
    /// Fails with [`NotifierInitError::Config`] when a required delivery
    /// field is missing and with [`NotifierInitError::Transport`] when no
    /// HTTP client could be constructed.
    pub fn from_config(config: &ReporterConfig) -> Result<Self, NotifierInitError> {
        let target = config.webhook_target()?;
        let webhook_url = match &config.webhook_url {
            Some(url) => url.clone(),
            None => format!(
                "https://{}.slack.com/services/hooks/incoming-webhook?token={}&parse=full",
                target.username.trim(),
                target.token.trim()
            ),
        };
        Self::with_url(
            webhook_url,
            target.channel,
            target.user,
            target.icon,
            config.accept_invalid_certs,
        )
    }

    /// Build a notifier against an explicit endpoint.
    pub fn with_url(
        webhook_url: impl Into<String>,
        channel: impl Into<String>,
        user: impl Into<String>,
        icon: impl Into<String>,
        accept_invalid_certs: bool,
    ) -> Result<Self, NotifierInitError> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .user_agent(CLIENT_USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(NotifierInitError::Transport)?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
            channel: channel.into(),
            user: user.into(),
            icon: icon.into(),
        })
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Post the message. The response is discarded whatever its status; a
    /// returned error only means the request itself could not be sent.
    pub async fn send(&self, text: &str) -> Result<(), reqwest::Error> {
        let payload = WebhookPayload {
            channel: self.channel.clone(),
            username: self.user.clone(),
            icon_emoji: self.icon.clone(),
            text: text.trim().to_string(),
        };
        let fields = [("payload", serde_json::to_string(&payload).unwrap_or_default())];

        let response = self
            .client
            .post(&self.webhook_url)
            .form(&fields)
            .send()
            .await?;
        debug!(status = %response.status(), "webhook response discarded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ReporterConfig {
        ReporterConfig::new()
            .with_username("company")
            .with_token("secret-token")
            .with_webhook_channel("#incidents")
    }

    #[test]
    fn test_webhook_url_derived_from_username_and_token() {
        let notifier = SlackNotifier::from_config(&configured()).unwrap();
        assert_eq!(
            notifier.webhook_url(),
            "https://company.slack.com/services/hooks/incoming-webhook?token=secret-token&parse=full"
        );
    }

    #[test]
    fn test_explicit_webhook_url_wins() {
        let config = configured().with_webhook_url("https://hooks.example.com/T123/hook");
        let notifier = SlackNotifier::from_config(&config).unwrap();
        assert_eq!(notifier.webhook_url(), "https://hooks.example.com/T123/hook");
    }

    #[test]
    fn test_missing_fields_fail_before_any_client_is_built() {
        let err = SlackNotifier::from_config(&ReporterConfig::new()).unwrap_err();
        assert!(matches!(err, NotifierInitError::Config(_)));
    }

    #[test]
    fn test_payload_serializes_with_fixed_field_order() {
        let payload = WebhookPayload {
            channel: "#incidents".to_string(),
            username: "reporter.production".to_string(),
            icon_emoji: ":ghost:".to_string(),
            text: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r##"{"channel":"#incidents","username":"reporter.production","icon_emoji":":ghost:","text":"boom"}"##
        );
    }
}
