use anyhow::{Context, Result};
use dotenvy::dotenv;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_ssl_disabled: bool,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            db_host: env::var("DB_HOST").context("DB_HOST must be set")?,
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "3306".to_string())
                .parse()
                .context("DB_PORT must be a valid port number")?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "defaultdb".to_string()),
            db_user: env::var("DB_USER").context("DB_USER must be set")?,
            db_password: env::var("DB_PASSWORD").context("DB_PASSWORD must be set")?,
            db_ssl_disabled: parse_flag("DB_SSL_DISABLED")?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            db_acquire_timeout: Duration::from_secs(
                env::var("DB_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid number")?,
            ),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            debug: parse_flag("DEBUG")?,
        })
    }

    /// Connection options for the website store
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let ssl_mode = if self.db_ssl_disabled {
            MySqlSslMode::Disabled
        } else {
            MySqlSslMode::Preferred
        };

        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
            .ssl_mode(ssl_mode)
    }

    /// Default `EnvFilter` directive when RUST_LOG is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug,site_catalog=debug,sqlx=info"
        } else {
            "info,site_catalog=debug,sqlx=warn"
        }
    }
}

/// Unset means false; anything else must parse as a boolean flag
fn parse_flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Ok(value) => parse_bool(&value).with_context(|| format!("{} must be true or false", name)),
        Err(_) => Ok(false),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("Invalid boolean flag: {}", other)),
    }
}
