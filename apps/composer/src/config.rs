use std::path::PathBuf;

use anyhow::Result;

/// Runtime configuration loaded from environment variables.
/// Every knob has a default, so an empty environment is a valid one.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `*.html` document templates.
    pub template_dir: PathBuf,
    /// Template used when the caller does not name one.
    pub default_template: String,
    /// Log filter applied when RUST_LOG is not set.
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            template_dir: PathBuf::from(env_or("TEMPLATE_DIR", "templates")),
            default_template: env_or("DEFAULT_TEMPLATE", "modern"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
