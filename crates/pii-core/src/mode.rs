//! Masking modes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Replacement strategy applied to every surviving span in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskingMode {
    /// Fixed placeholder chosen by entity kind
    #[default]
    Replace,
    /// Deterministic fixed-width digest of the value
    Hash,
    /// Random per-occurrence opaque token
    #[serde(alias = "encrypt")]
    Tokenize,
}

impl MaskingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskingMode::Replace => "replace",
            MaskingMode::Hash => "hash",
            MaskingMode::Tokenize => "tokenize",
        }
    }
}

impl FromStr for MaskingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(MaskingMode::Replace),
            "hash" => Ok(MaskingMode::Hash),
            "tokenize" | "encrypt" => Ok(MaskingMode::Tokenize),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for MaskingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
