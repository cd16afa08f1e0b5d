use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(env::var("PORT").ok()),
            api_base_url: resolve_api_base_url(env::var("HABITS_API_URL").ok()),
        }
    }
}

pub fn resolve_port(value: Option<String>) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn resolve_api_base_url(value: Option<String>) -> String {
    value
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
