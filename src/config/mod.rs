//! Configuration module for the VCC client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote record and session service
    pub base_url: String,
    /// Origin used to derive public record URLs (QR payload, copy-link)
    pub public_origin: String,
    /// Directory holding persisted client state (session file)
    pub state_dir: PathBuf,
    /// Directory exported certificates are written to
    pub export_dir: PathBuf,
    /// Optional background template image for rendered certificates
    pub template_path: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("VCC_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let public_origin = env::var("VCC_PUBLIC_ORIGIN")
            .unwrap_or_else(|_| base_url.clone())
            .trim_end_matches('/')
            .to_string();

        let state_dir = env::var("VCC_STATE_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();

        let export_dir = env::var("VCC_EXPORT_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        let template_path = env::var("VCC_TEMPLATE_PATH").ok().map(PathBuf::from);

        let log_level = env::var("VCC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            base_url,
            public_origin,
            state_dir,
            export_dir,
            template_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("VCC_BASE_URL");
        env::remove_var("VCC_PUBLIC_ORIGIN");
        env::remove_var("VCC_STATE_DIR");
        env::remove_var("VCC_EXPORT_DIR");
        env::remove_var("VCC_TEMPLATE_PATH");
        env::remove_var("VCC_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.public_origin, config.base_url);
        assert_eq!(config.state_dir, PathBuf::from("./data"));
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(config.template_path.is_none());
        assert_eq!(config.log_level, "info");
    }
}
