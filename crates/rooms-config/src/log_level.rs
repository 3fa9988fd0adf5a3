use crate::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_LEVEL_STRING};

use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Log level filter, parsed from the usual lowercase names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub log::LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self(log::LevelFilter::Off)),
            "error" => Ok(Self(log::LevelFilter::Error)),
            "warn" => Ok(Self(log::LevelFilter::Warn)),
            "info" => Ok(Self(log::LevelFilter::Info)),
            "debug" => Ok(Self(log::LevelFilter::Debug)),
            "trace" => Ok(Self(log::LevelFilter::Trace)),
            other => Err(format!(
                "unknown log level '{}' (expected one of off/error/warn/info/debug/trace, default '{}')",
                other, DEFAULT_LOG_LEVEL_STRING
            )),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Deref for LogLevel {
    type Target = log::LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
