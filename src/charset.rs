use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Digits followed by upper and lower case ASCII letters.
pub const BASE62: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// [`BASE62`] plus `+` and `/`.
pub const BASE64: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";
/// Lower case hexadecimal digits.
pub const HEX: &str = "0123456789abcdef";
pub const DEFAULT_CHARSET: &str = BASE62;

/// Ordered set of distinct symbols a token is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<char>,
}

impl Charset {
    /// Build a charset from the `char`s of `symbols`.
    ///
    /// Fails if `symbols` is empty or repeats a symbol, since a repeated
    /// symbol would be drawn more often than the others.
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for &c in &symbols {
            if !seen.insert(c) {
                return Err(ConfigError::DuplicateSymbol(c));
            }
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `idx`. Panics if `idx >= len()`.
    #[inline]
    pub fn symbol(&self, idx: usize) -> char {
        self.symbols[idx]
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.chars().collect(),
        }
    }
}

impl FromStr for Charset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
