//! Server configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `PORTFOLIO_*` environment variables and
//! an optional configuration file. Accessors apply the defaults.

use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
/// Default sender for notification emails.
pub const DEFAULT_NOTIFY_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";
const DEFAULT_EMAIL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Settings controlling the HTTP server, store selection and notification.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTFOLIO")]
pub struct ServerSettings {
    /// Listen address, e.g. `0.0.0.0:5000`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; absent selects the in-memory store.
    pub database_url: Option<String>,
    /// Seed dataset name; absent selects the registry default.
    pub seed_name: Option<String>,
    /// Seed the PostgreSQL store when its projects table is empty.
    pub seed_on_startup: Option<bool>,
    /// Optional replacement for the bundled content registry.
    pub content_registry_path: Option<PathBuf>,
    /// Resend API key; absent disables notification.
    pub resend_api_key: Option<String>,
    /// Notification recipient.
    pub notify_to: Option<String>,
    /// Notification sender.
    pub notify_from: Option<String>,
    /// Timeout for the email call, in seconds.
    pub email_timeout_secs: Option<u64>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address could not be parsed.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr {
        /// Raw configured value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Credentials and addresses for email notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings<'a> {
    /// Resend API key.
    pub api_key: &'a str,
    /// Recipient address.
    pub to: &'a str,
    /// Sender address.
    pub from: &'a str,
    /// HTTP timeout.
    pub timeout: Duration,
}

/// Why notification is turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationDisabled {
    /// No API key was configured.
    MissingApiKey,
    /// An API key was configured without a recipient.
    MissingRecipient,
}

impl ServerSettings {
    /// Return the parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).trim();
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return the database URL when one is configured and non-blank.
    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_deref())
    }

    /// Return the requested seed name, if any.
    pub fn seed_name(&self) -> Option<&str> {
        self.seed_name.as_deref()
    }

    /// Return whether startup seeding is enabled; defaults to `true`.
    pub fn seed_on_startup(&self) -> bool {
        self.seed_on_startup.unwrap_or(true)
    }

    /// Return the content registry override, if any.
    pub fn content_registry_path(&self) -> Option<&Path> {
        self.content_registry_path.as_deref()
    }

    /// Return the email HTTP timeout.
    pub fn email_timeout(&self) -> Duration {
        Duration::from_secs(
            self.email_timeout_secs
                .unwrap_or(DEFAULT_EMAIL_TIMEOUT_SECS),
        )
    }

    /// Return the pool size, never below one.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }

    /// Resolve notification settings.
    ///
    /// An API key without a recipient disables notification instead of
    /// failing startup; callers log the returned reason.
    pub fn notification(&self) -> Result<NotificationSettings<'_>, NotificationDisabled> {
        let api_key = non_blank(self.resend_api_key.as_deref())
            .ok_or(NotificationDisabled::MissingApiKey)?;
        let to = non_blank(self.notify_to.as_deref())
            .ok_or(NotificationDisabled::MissingRecipient)?;
        let from = non_blank(self.notify_from.as_deref()).unwrap_or(DEFAULT_NOTIFY_FROM);
        Ok(NotificationSettings {
            api_key,
            to,
            from,
            timeout: self.email_timeout(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 10] = [
        "PORTFOLIO_BIND_ADDR",
        "PORTFOLIO_DATABASE_URL",
        "PORTFOLIO_SEED_NAME",
        "PORTFOLIO_SEED_ON_STARTUP",
        "PORTFOLIO_CONTENT_REGISTRY_PATH",
        "PORTFOLIO_RESEND_API_KEY",
        "PORTFOLIO_NOTIFY_TO",
        "PORTFOLIO_NOTIFY_FROM",
        "PORTFOLIO_EMAIL_TIMEOUT_SECS",
        "PORTFOLIO_DB_MAX_CONNECTIONS",
    ];

    fn env_with(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("portfolio-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:5000".parse::<SocketAddr>().expect("literal address")
        );
        assert!(settings.database_url().is_none());
        assert!(settings.seed_name().is_none());
        assert!(settings.seed_on_startup());
        assert!(settings.content_registry_path().is_none());
        assert_eq!(settings.email_timeout(), Duration::from_secs(10));
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(
            settings.notification(),
            Err(NotificationDisabled::MissingApiKey)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("PORTFOLIO_BIND_ADDR", "127.0.0.1:8080"),
            ("PORTFOLIO_DATABASE_URL", "postgres://localhost/portfolio"),
            ("PORTFOLIO_SEED_NAME", "showcase"),
            ("PORTFOLIO_SEED_ON_STARTUP", "false"),
            ("PORTFOLIO_CONTENT_REGISTRY_PATH", "/tmp/content.json"),
            ("PORTFOLIO_RESEND_API_KEY", "re_test"),
            ("PORTFOLIO_NOTIFY_TO", "owner@example.com"),
            ("PORTFOLIO_EMAIL_TIMEOUT_SECS", "3"),
            ("PORTFOLIO_DB_MAX_CONNECTIONS", "4"),
        ]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address parses").port(),
            8080
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/portfolio")
        );
        assert_eq!(settings.seed_name(), Some("showcase"));
        assert!(!settings.seed_on_startup());
        assert_eq!(
            settings.content_registry_path(),
            Some(Path::new("/tmp/content.json"))
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(
            settings.notification(),
            Ok(NotificationSettings {
                api_key: "re_test",
                to: "owner@example.com",
                from: DEFAULT_NOTIFY_FROM,
                timeout: Duration::from_secs(3),
            })
        );
    }

    #[rstest]
    #[case::unset(None, true)]
    #[case::disabled(Some("false"), false)]
    #[case::enabled(Some("true"), true)]
    fn seed_on_startup_follows_environment(
        #[case] value: Option<&str>,
        #[case] expected: bool,
    ) {
        let overrides: Vec<(&str, &str)> = value
            .map(|v| ("PORTFOLIO_SEED_ON_STARTUP", v))
            .into_iter()
            .collect();
        let _guard = lock_env(env_with(&overrides));

        let settings = load_from_empty_args();
        assert_eq!(settings.seed_on_startup(), expected);
    }

    #[rstest]
    fn api_key_without_recipient_disables_notification() {
        let _guard = lock_env(env_with(&[("PORTFOLIO_RESEND_API_KEY", "re_test")]));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.notification(),
            Err(NotificationDisabled::MissingRecipient)
        );
    }

    #[rstest]
    fn invalid_bind_address_is_reported() {
        let _guard = lock_env(env_with(&[("PORTFOLIO_BIND_ADDR", "not-an-address")]));

        let settings = load_from_empty_args();
        let err = settings.bind_addr().expect_err("address is invalid");
        assert!(matches!(err, SettingsError::BindAddr { value, .. } if value == "not-an-address"));
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env(env_with(&[("PORTFOLIO_DATABASE_URL", "  ")]));

        assert!(load_from_empty_args().database_url().is_none());
    }
}
