//! Reporter configuration and its normalizing setters

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Display name used when no webhook user is configured explicitly.
pub const DEFAULT_WEBHOOK_USER: &str = "mayday-reporter";

fn default_accept_invalid_certs() -> bool {
    // The upstream delivery path skips verification; opt back in per deployment.
    true
}

/// Process-wide reporter settings, populated once at startup.
///
/// Setters trim their input and never validate; the four delivery fields
/// (`username`, `token`, `webhook_user`, `webhook_channel`) are checked on
/// first use via [`ReporterConfig::webhook_target`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Slack subdomain (e.g. `company` for company.slack.com)
    pub username: Option<String>,
    /// Slack integration token
    pub token: Option<String>,
    /// Channel messages are posted to
    pub webhook_channel: Option<String>,
    /// Full webhook endpoint; overrides the URL derived from `username` and
    /// `token` when set
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Display name of the posting user
    pub webhook_user: Option<String>,
    /// Icon for the posting user, an emoji code or a URL
    pub webhook_icon: String,
    /// Hostname the application is running on
    pub hostname: String,
    /// Application version
    pub version: String,
    /// Application environment (e.g. production or development)
    pub env: String,
    /// Directory trace files are written to; system temp dir when unset
    pub trace_path: Option<PathBuf>,
    /// Skip TLS certificate verification on webhook delivery
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            webhook_channel: None,
            webhook_url: None,
            webhook_user: Some(DEFAULT_WEBHOOK_USER.to_string()),
            webhook_icon: ":ghost:".to_string(),
            hostname: "localhost".to_string(),
            version: "1.0.0".to_string(),
            env: "production".to_string(),
            trace_path: None,
            accept_invalid_certs: default_accept_invalid_certs(),
        }
    }
}

/// Borrowed view of the required delivery fields, produced by validation.
#[derive(Debug, Clone, Copy)]
pub struct WebhookTarget<'a> {
    pub username: &'a str,
    pub token: &'a str,
    pub channel: &'a str,
    pub user: &'a str,
    pub icon: &'a str,
}

impl ReporterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.trim().to_string());
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.trim().to_string());
        self
    }

    pub fn with_webhook_channel(mut self, channel: &str) -> Self {
        self.webhook_channel = Some(channel.trim().to_string());
        self
    }

    /// Point delivery at a full webhook URL instead of the endpoint derived
    /// from `username` and `token`. The required-field check is unaffected.
    pub fn with_webhook_url(mut self, url: &str) -> Self {
        self.webhook_url = Some(url.trim().to_string());
        self
    }

    /// Set the posting user. The configured `env` is appended to the name at
    /// call time, so set `env` first; a later `env` change does not update a
    /// previously stored user.
    pub fn with_webhook_user(mut self, user: &str) -> Self {
        self.webhook_user = Some(format!("{}.{}", user.trim(), self.env));
        self
    }

    /// Set the posting icon. The bare word `ghost` is normalized to
    /// `:ghost:`; any other value is stored verbatim.
    pub fn with_webhook_icon(mut self, icon: &str) -> Self {
        let icon = icon.trim();
        self.webhook_icon = if icon == "ghost" {
            ":ghost:".to_string()
        } else {
            icon.to_string()
        };
        self
    }

    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.trim().to_string();
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.trim().to_string();
        self
    }

    pub fn with_env(mut self, env: &str) -> Self {
        self.env = env.trim().to_string();
        self
    }

    /// Set the trace directory. Paths that are not existing directories are
    /// discarded so resolution falls back to the system temp dir.
    pub fn with_trace_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.trace_path = if path.is_dir() { Some(path) } else { None };
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Borrow the required delivery fields, or fail with the stable
    /// missing-configuration code. This is the single validation point;
    /// nothing is written or sent before it passes.
    pub fn webhook_target(&self) -> Result<WebhookTarget<'_>, ConfigError> {
        match (
            &self.username,
            &self.token,
            &self.webhook_user,
            &self.webhook_channel,
        ) {
            (Some(username), Some(token), Some(user), Some(channel)) => Ok(WebhookTarget {
                username,
                token,
                channel,
                user,
                icon: &self.webhook_icon,
            }),
            _ => Err(ConfigError::MissingRequired),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.webhook_target().map(|_| ())
    }

    /// Directory trace files are written to.
    pub fn resolved_trace_path(&self) -> PathBuf {
        match &self.trace_path {
            Some(path) if path.is_dir() => path.clone(),
            _ => std::env::temp_dir(),
        }
    }
}
