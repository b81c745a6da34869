use std::env;
use std::path::PathBuf;

use crate::query::{MatchRules, DEFAULT_PRICE_WINDOW};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
// Anchored to the crate so the binary works from any working directory.
pub const DEFAULT_DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/vehicles.json");

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_path: PathBuf,
    /// Empty means any origin may call the API.
    pub cors_allowed_origins: Vec<String>,
    pub log_json: bool,
    pub rules: MatchRules,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cors_allowed_origins: Vec::new(),
            log_json: false,
            rules: MatchRules::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable lookup; unset or malformed values
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("VEHICLES_BIND").unwrap_or(defaults.bind_addr),
            data_path: lookup("VEHICLES_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            cors_allowed_origins: parse_list(lookup("VEHICLES_CORS_ALLOWED_ORIGINS")),
            log_json: parse_bool(lookup("VEHICLES_LOG_JSON"), defaults.log_json),
            rules: MatchRules {
                price_window: lookup("VEHICLES_PRICE_WINDOW")
                    .and_then(|v| v.trim().parse::<u64>().ok())
                    .unwrap_or(DEFAULT_PRICE_WINDOW),
                match_registration_date: parse_bool(
                    lookup("VEHICLES_MATCH_REGISTRATION_DATE"),
                    defaults.rules.match_registration_date,
                ),
            },
        }
    }
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn parse_list(value: Option<String>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
