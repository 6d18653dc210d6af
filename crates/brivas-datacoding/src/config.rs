//! Segmentation configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{CodingError, Result};

/// Octet limits applied when a message body is split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Max body octets of a single short message
    pub single_octet_limit: usize,
    /// Octets reserved in every segment for the concatenation header
    pub udh_length: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            single_octet_limit: 140,
            udh_length: 6, // 8-bit reference concatenation IE
        }
    }
}

impl SegmentationConfig {
    /// Body octets left per segment once the header is in place
    pub fn concat_octet_limit(&self) -> usize {
        self.single_octet_limit.saturating_sub(self.udh_length)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CodingError::Config(e.to_string()))?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| CodingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            single_octet_limit: env_or("DATACODING_SINGLE_OCTET_LIMIT", defaults.single_octet_limit)?,
            udh_length: env_or("DATACODING_UDH_LENGTH", defaults.udh_length)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.udh_length >= self.single_octet_limit {
            return Err(CodingError::Config(format!(
                "udh_length {} leaves no room in single_octet_limit {}",
                self.udh_length, self.single_octet_limit
            )));
        }
        Ok(())
    }
}

fn env_or(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map_err(|e| CodingError::Config(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}
