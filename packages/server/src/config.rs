use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Value shipped in the sample `.env`; treated as "no key configured".
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Deployment environment. Controls how much error detail reaches clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than "development" is treated as production.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub llm_base_url: String,
    pub llm_timeout: Duration,
    pub ngo_roster_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: Environment::Development,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            llm_base_url: openai_client::GEMINI_OPENAI_BASE_URL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            ngo_roster_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: env::var("ENVIRONMENT")
                .map(|v| Environment::parse(&v))
                .unwrap_or(defaults.environment),
            gemini_api_key: normalize_api_key(env::var("GEMINI_API_KEY").ok()),
            gemini_model: env::var("GEMINI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(defaults.gemini_model),
            llm_base_url: env::var("LLM_BASE_URL").unwrap_or(defaults.llm_base_url),
            llm_timeout: Duration::from_secs(
                env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_LLM_TIMEOUT_SECS.to_string())
                    .parse()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            ngo_roster_path: env::var("NGO_ROSTER_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Whether a usable LLM credential is present.
    pub fn gemini_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_api_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" Development "), Environment::Development);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Production);
    }

    #[test]
    fn test_placeholder_and_blank_keys_are_unset() {
        assert_eq!(normalize_api_key(None), None);
        assert_eq!(normalize_api_key(Some("   ".into())), None);
        assert_eq!(normalize_api_key(Some(PLACEHOLDER_API_KEY.into())), None);
        assert_eq!(
            normalize_api_key(Some(" real-key ".into())),
            Some("real-key".to_string())
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert!(!config.gemini_configured());
        assert!(config.environment.is_development());
    }
}
