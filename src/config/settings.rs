//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_PORT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SQLITE_PATH,
    ENV_DEVELOPMENT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Host of the primary store; absence forces the embedded fallback
    pub db_host: Option<String>,
    pub db_user: String,
    db_password: String,
    pub db_name: String,
    pub db_port: u16,
    /// Optional TLS client-cert material for managed database providers
    pub db_ssl_ca: Option<String>,
    pub db_ssl_cert: Option<String>,
    pub db_ssl_key: Option<String>,
    /// File path for the embedded fallback store
    pub sqlite_path: String,
    pub server_host: String,
    pub server_port: u16,
    pub app_env: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_user", &self.db_user)
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("db_port", &self.db_port)
            .field("sqlite_path", &self.sqlite_path)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("app_env", &self.app_env)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            db_host: env::var("DB_HOST").ok().filter(|h| !h.is_empty()),
            db_user: env::var("DB_USER").unwrap_or_default(),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_name: env::var("DB_NAME").unwrap_or_default(),
            db_port: env::var("DB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT),
            db_ssl_ca: env::var("DB_SSL_CA").ok(),
            db_ssl_cert: env::var("DB_SSL_CERT").ok(),
            db_ssl_key: env::var("DB_SSL_KEY").ok(),
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| DEFAULT_SQLITE_PATH.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            app_env: env::var("APP_ENV").unwrap_or_default(),
        }
    }

    /// Connection URL for the primary store, or `None` when no host is
    /// configured and the embedded fallback must be used.
    pub fn primary_url(&self) -> Option<String> {
        let host = self.db_host.as_deref()?;
        let mut url = format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, host, self.db_port, self.db_name
        );

        // Managed providers hand out client-cert material; sqlx picks these
        // up as URL options.
        let mut params = Vec::new();
        if let Some(ca) = &self.db_ssl_ca {
            params.push(format!("sslrootcert={ca}"));
        }
        if let Some(cert) = &self.db_ssl_cert {
            params.push(format!("sslcert={cert}"));
        }
        if let Some(key) = &self.db_ssl_key {
            params.push(format!("sslkey={key}"));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        Some(url)
    }

    /// Connection URL for the embedded fallback store.
    pub fn fallback_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.sqlite_path)
    }

    /// Whether the environment mode flag enables debug behavior.
    pub fn is_development(&self) -> bool {
        self.app_env == ENV_DEVELOPMENT
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
