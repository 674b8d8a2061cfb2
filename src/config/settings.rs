//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_HASH_MEMORY_COST_KIB, DEFAULT_HASH_PARALLELISM, DEFAULT_HASH_TIME_COST,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Argon2 memory cost in KiB
    pub hash_memory_cost_kib: u32,
    /// Argon2 iteration count
    pub hash_time_cost: u32,
    /// Argon2 lanes
    pub hash_parallelism: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_memory_cost_kib: DEFAULT_HASH_MEMORY_COST_KIB,
            hash_time_cost: DEFAULT_HASH_TIME_COST,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl Config {
    /// Load configuration from `.env` and environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults with a warning,
    /// so tracing should be initialized first. Out of range hashing costs are
    /// rejected later when the encrypter is built.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            hash_memory_cost_kib: parse_var("HASH_MEMORY_COST_KIB", DEFAULT_HASH_MEMORY_COST_KIB),
            hash_time_cost: parse_var("HASH_TIME_COST", DEFAULT_HASH_TIME_COST),
            hash_parallelism: parse_var("HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable setting, using default");
            default
        }),
        Err(_) => default,
    }
}
