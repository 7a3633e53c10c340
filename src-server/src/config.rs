use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use supercoach_core::progress::{DEFAULT_MONTHS_BACK, MAX_MONTHS_BACK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown log format '{}'", other),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub default_months_back: u32,
    pub seed_demo: bool,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("SC_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid SC_LISTEN_ADDR")?;
        let cors_allow = env_or("SC_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("SC_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let default_months_back: u32 = env_or("SC_DEFAULT_MONTHS_BACK", "6")
            .parse()
            .context("Invalid SC_DEFAULT_MONTHS_BACK")?;
        if default_months_back == 0 || default_months_back > MAX_MONTHS_BACK {
            anyhow::bail!(
                "SC_DEFAULT_MONTHS_BACK must be between 1 and {}, got {}",
                MAX_MONTHS_BACK,
                default_months_back
            );
        }
        let seed_demo = matches!(
            env_or("SC_SEED_DEMO", "false").to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );
        let log_format = env_or("SC_LOG_FORMAT", "text").parse()?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            default_months_back,
            seed_demo,
            log_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            default_months_back: DEFAULT_MONTHS_BACK,
            seed_demo: false,
            log_format: LogFormat::Text,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
