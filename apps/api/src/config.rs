use anyhow::{Context, Result};
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// The single browser origin allowed to call the API cross-origin.
    pub allowed_origin: HeaderValue,
    /// Either a bare level (`info`) or a full `EnvFilter` directive list.
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, so parsing is testable
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let origin = lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let allowed_origin = HeaderValue::from_str(origin.trim())
            .with_context(|| format!("ALLOWED_ORIGIN '{origin}' is not a valid header value"))?;

        Ok(Config {
            port,
            allowed_origin,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Tracing filter directives. A bare level applies to this crate and to the
    /// `tower_http` request traces; anything containing `=` or `,` is used as is.
    pub fn log_directive(&self) -> String {
        let level = self.rust_log.trim();
        if level.contains('=') || level.contains(',') {
            level.to_string()
        } else {
            format!("{crate_name}={level},tower_http={level}", crate_name = env!("CARGO_CRATE_NAME"))
        }
    }
}
