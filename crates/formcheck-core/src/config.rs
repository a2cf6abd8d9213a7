//! Configuration module
//!
//! Env-driven configuration for the analysis API. Every setting has a
//! development default so a bare `cargo run` serves on the loopback port the
//! webapp expects.

use std::env;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_VIDEO_SIZE_MB: usize = 200;

/// Server configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub max_video_size_bytes: usize,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = match env::var("PORT") {
            Ok(val) => val
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", val, e))?,
            Err(_) => DEFAULT_PORT,
        };

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_video_size_bytes = match env::var("MAX_VIDEO_SIZE_MB") {
            Ok(val) => {
                let mb: usize = val
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid MAX_VIDEO_SIZE_MB '{}': {}", val, e))?;
                mb * 1024 * 1024
            }
            Err(_) => DEFAULT_MAX_VIDEO_SIZE_MB * 1024 * 1024,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|val| parse_origins(&val))
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            server_port,
            environment,
            max_video_size_bytes,
            cors_origins,
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Allow any origin? True for the default `*` configuration.
    pub fn cors_allow_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            max_video_size_bytes: DEFAULT_MAX_VIDEO_SIZE_MB * 1024 * 1024,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://app.example.com");
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://app.example.com".to_string()
            ]
        );
    }

    #[test]
    fn parse_origins_drops_empty_entries() {
        assert_eq!(parse_origins("a,,b,"), vec!["a", "b"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn default_config_is_development_loopback() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert!(!config.is_production());
        assert!(config.cors_allow_any());
        assert_eq!(config.max_video_size_bytes, 200 * 1024 * 1024);
    }

    #[test]
    fn is_production_matches_both_spellings() {
        let mut config = Config::default();
        config.environment = "Production".to_string();
        assert!(config.is_production());
        config.environment = "prod".to_string();
        assert!(config.is_production());
        config.environment = "staging".to_string();
        assert!(!config.is_production());
    }
}
