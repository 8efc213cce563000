use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use service_core::retry::RetryConfig;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_INITIAL_BACKOFF_MS: u64 = 250;
/// Front-end assets shipped with the crate, independent of the working directory.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub http: HttpSettings,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    /// Per-attempt deadline for a generate call.
    pub timeout_secs: u64,
    /// Retries after the first attempt, for transient failures only.
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
}

impl AssistantConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let config = AssistantConfig {
            common: common_config,
            gemini: GeminiSettings {
                // A missing key does not stop the service; generate calls fail instead.
                api_key: Secret::new(get_env("GEMINI_API_KEY", Some(""), false)?),
                model: get_env("GEMINI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_API_BASE), false)?,
                timeout_secs: parse_setting(
                    "GEMINI_TIMEOUT_SECS",
                    env::var("GEMINI_TIMEOUT_SECS").ok(),
                    DEFAULT_TIMEOUT_SECS,
                )?,
                max_retries: parse_setting(
                    "GEMINI_MAX_RETRIES",
                    env::var("GEMINI_MAX_RETRIES").ok(),
                    DEFAULT_MAX_RETRIES,
                )?,
                initial_backoff_ms: parse_setting(
                    "GEMINI_INITIAL_BACKOFF_MS",
                    env::var("GEMINI_INITIAL_BACKOFF_MS").ok(),
                    DEFAULT_INITIAL_BACKOFF_MS,
                )?,
            },
            http: HttpSettings {
                allowed_origins: get_env("CORS_ALLOWED_ORIGINS", Some("*"), false)?
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect(),
                static_dir: get_env("STATIC_DIR", Some(DEFAULT_STATIC_DIR), false)?,
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.gemini.timeout_secs == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_TIMEOUT_SECS must be greater than zero"
            )));
        }
        Ok(())
    }

    /// Configuration for tests: random port, no credentials, no retries.
    pub fn for_tests() -> Self {
        AssistantConfig {
            common: core_config::Config {
                port: 0,
                debug: true,
            },
            gemini: GeminiSettings {
                api_key: Secret::new(String::new()),
                model: DEFAULT_MODEL.to_string(),
                api_base: DEFAULT_API_BASE.to_string(),
                timeout_secs: 5,
                max_retries: 0,
                initial_backoff_ms: 10,
            },
            http: HttpSettings {
                allowed_origins: vec!["*".to_string()],
                static_dir: DEFAULT_STATIC_DIR.to_string(),
            },
            otlp_endpoint: None,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini.api_key.expose_secret().is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.gemini.timeout_secs)
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.gemini.max_retries,
            initial_backoff: Duration::from_millis(self.gemini.initial_backoff_ms),
            ..RetryConfig::default()
        }
    }
}

/// Parse an optional numeric setting; unset or blank means `default`.
fn parse_setting<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, value, e))
        }),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
