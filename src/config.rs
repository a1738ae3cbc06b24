use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charset::DEFAULT_CHARSET;
use crate::sampler::MAX_ENTROPY_DRAW;

/// Runtime configuration for a token generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbols tokens are drawn from, each distinct.
    pub charset: String,
    /// Symbols per token.
    pub length: usize,
    /// Upper bound on bytes requested from the entropy source per pass.
    pub max_draw_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            length: 32,
            max_draw_bytes: MAX_ENTROPY_DRAW,
        }
    }
}

impl Config {
    /// Parse a JSON config. Missing fields take their default.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Load a JSON config from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
