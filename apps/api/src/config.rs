use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Timeout for the single generation call. The call is never retried.
    pub llm_timeout_secs: u64,
    /// Timeout for each remote compile backend call (and the one-shot
    /// follow-up fetch). Backends are tried once each, in order.
    pub compile_timeout_secs: u64,
    pub ytotech_url: String,
    pub latexonline_url: String,
    pub rtex_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout_secs: parse_env_u64("LLM_TIMEOUT_SECS", 120)?,
            compile_timeout_secs: parse_env_u64("COMPILE_TIMEOUT_SECS", 30)?,
            ytotech_url: std::env::var("YTOTECH_URL")
                .unwrap_or_else(|_| "https://latex.ytotech.com/builds/sync".to_string()),
            latexonline_url: std::env::var("LATEXONLINE_URL")
                .unwrap_or_else(|_| "https://latexonline.cc/compile".to_string()),
            rtex_url: std::env::var("RTEX_URL")
                .unwrap_or_else(|_| "https://rtex.probablyaweb.site/api/v2".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_u64(key: &str, default: u64) -> Result<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a positive integer")),
        Err(_) => Ok(default),
    }
}
