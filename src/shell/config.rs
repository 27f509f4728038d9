use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::modules::accounts::use_cases::change_balance::retry_policy::{
    Backoff, DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS, RetryPolicy,
};

pub const ADDR: &str = "BANK_ACCOUNTS_ADDR";
pub const MAX_ATTEMPTS: &str = "BANK_ACCOUNTS_MAX_ATTEMPTS";
pub const BACKOFF: &str = "BANK_ACCOUNTS_BACKOFF";
pub const BACKOFF_MS: &str = "BANK_ACCOUNTS_BACKOFF_MS";
pub const BACKOFF_MAX_MS: &str = "BANK_ACCOUNTS_BACKOFF_MAX_MS";

const DEFAULT_BACKOFF_MAX: Duration = Duration::from_millis(2_000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub retry: RetryPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = parse(&lookup, ADDR)?.unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let max_attempts: u32 = parse(&lookup, MAX_ATTEMPTS)?.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(invalid(MAX_ATTEMPTS, "0", "at least one attempt is required"));
        }

        let delay = parse::<u64>(&lookup, BACKOFF_MS)?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_BACKOFF);

        let backoff = match lookup(BACKOFF).as_deref().map(str::trim) {
            None | Some("") | Some("fixed") => Backoff::Fixed(delay),
            Some("exponential") => Backoff::Exponential {
                base: delay,
                max: parse::<u64>(&lookup, BACKOFF_MAX_MS)?
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_BACKOFF_MAX),
                jitter: true,
            },
            Some(other) => {
                return Err(invalid(BACKOFF, other, "expected `fixed` or `exponential`"));
            }
        };

        Ok(Self {
            addr,
            retry: RetryPolicy::new(max_attempts, backoff),
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| invalid(key, &raw, &e.to_string())),
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
