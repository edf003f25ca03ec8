use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// SMTP credentials for the contact form. Absent when either variable is unset.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub user: String,
    pub app_password: String,
}

/// Application configuration loaded from environment variables.
/// Everything has a default; missing SMTP credentials disable the contact form.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    /// JSON résumé overriding the built-in data.
    pub data_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
    pub smtp: Option<SmtpConfig>,
    /// Recipient of contact messages. Defaults to the résumé's email.
    pub contact_email: Option<String>,
    pub contact_cooldown: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let smtp = match (var("SMTP_USER"), var("SMTP_APP_PASSWORD")) {
            (Some(user), Some(app_password)) => Some(SmtpConfig {
                host: var("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                user,
                app_password,
            }),
            _ => None,
        };

        Ok(Config {
            output_dir: var("CV_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            data_path: var("CV_DATA_PATH").map(PathBuf::from),
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            smtp,
            contact_email: var("CONTACT_EMAIL"),
            contact_cooldown: Duration::from_secs(
                var("CONTACT_COOLDOWN_SECS")
                    .unwrap_or_else(|| "60".to_string())
                    .parse::<u64>()
                    .context("CONTACT_COOLDOWN_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.output_dir, PathBuf::from("public"));
        assert_eq!(c.port, 8080);
        assert_eq!(c.rust_log, "info");
        assert!(c.smtp.is_none());
        assert!(c.data_path.is_none());
        assert_eq!(c.contact_cooldown, Duration::from_secs(60));
    }

    #[test]
    fn test_smtp_needs_user_and_password() {
        assert!(config(&[("SMTP_USER", "me@example.com")]).unwrap().smtp.is_none());
        let c = config(&[
            ("SMTP_USER", "me@example.com"),
            ("SMTP_APP_PASSWORD", "secret"),
        ])
        .unwrap();
        let smtp = c.smtp.unwrap();
        assert_eq!(smtp.host, "smtp.gmail.com");
        assert_eq!(smtp.user, "me@example.com");
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let c = config(&[("CV_OUTPUT_DIR", "  "), ("CONTACT_EMAIL", "")]).unwrap();
        assert_eq!(c.output_dir, PathBuf::from("public"));
        assert!(c.contact_email.is_none());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config(&[("PORT", "not-a-port")]).is_err());
    }
}
