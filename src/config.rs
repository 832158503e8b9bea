use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::results::ResultsSource;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env()
});

pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL the results view and the CLI use to reach `/api/search`.
    pub api_base_url: String,
    pub static_dir: String,
    pub results_source: ResultsSource,
    pub firebase_api_key: Option<String>,
    pub identity_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            host: get_env_or_default("HOST", "0.0.0.0"),
            port: parse_env_or_default("PORT", 3001),
            api_base_url: get_env_or_default("API_BASE_URL", "http://localhost:3001"),
            static_dir: get_env_or_default("STATIC_DIR", "static"),
            results_source: parse_env_or_default("RESULTS_SOURCE", ResultsSource::Placeholder),
            firebase_api_key: env::var("FIREBASE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            identity_endpoint: get_env_or_default("IDENTITY_ENDPOINT", DEFAULT_IDENTITY_ENDPOINT),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3001,
            api_base_url: "http://localhost:3001".to_string(),
            static_dir: "static".to_string(),
            results_source: ResultsSource::Placeholder,
            firebase_api_key: None,
            identity_endpoint: DEFAULT_IDENTITY_ENDPOINT.to_string(),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env_or_default<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => default,
    }
}

#[test]
fn test_bind_addr() {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 8080,
        ..Config::default()
    };
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}
