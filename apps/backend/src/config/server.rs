use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_AI_THINK_MS: u64 = 1000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Delay before an AI seat acts, so clients can render the prior move.
    pub ai_think: Duration,
    /// Fixed shuffle seed; `None` uses OS entropy.
    pub deal_seed: Option<u64>,
    pub ai_seed: Option<u64>,
    /// Answer rejected intents with an error frame instead of silence.
    pub report_rejections: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ai_think: Duration::from_millis(DEFAULT_AI_THINK_MS),
            deal_seed: None,
            ai_seed: None,
            report_rejections: false,
        }
    }
}

impl ServerConfig {
    /// Build from `OFC_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("OFC_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parsed(&lookup, "OFC_PORT")?.unwrap_or(defaults.port);
        let ai_think = parsed::<u64, _>(&lookup, "OFC_AI_THINK_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.ai_think);
        let deal_seed = parsed(&lookup, "OFC_DEAL_SEED")?;
        let ai_seed = parsed(&lookup, "OFC_AI_SEED")?;
        let report_rejections = match lookup("OFC_REPORT_REJECTIONS") {
            None => defaults.report_rejections,
            Some(raw) => parse_bool("OFC_REPORT_REJECTIONS", &raw)?,
        };

        Ok(Self {
            host,
            port,
            ai_think,
            deal_seed,
            ai_seed,
            report_rejections,
        })
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::config(format!("{key} must be a valid number, got '{raw}': {e}"))),
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::config(format!(
            "{key} must be a boolean, got '{raw}'"
        ))),
    }
}
