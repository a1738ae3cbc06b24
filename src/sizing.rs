//! Sizing parameters for the rejection sampler.
//!
//! A candidate index is read from `index_width` random bytes. Values at or
//! above `rejection_threshold` are discarded so that every residue modulo
//! the symbol count is equally likely.

use crate::error::ConfigError;

/// Width in bytes of the accumulator a window is widened into.
pub const ACCUMULATOR_BYTES: usize = 8;

/// Number of distinct `char` values. No charset of distinct symbols can be
/// larger, which keeps `index_width` at three bytes or less.
pub const MAX_SYMBOLS: usize = char::MAX as usize + 1;

const BYTE_VALUES: u64 = 1 << 8;

/// Derived parameters for drawing indices into a set of `symbol_count`
/// symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    /// Number of symbols indices are drawn for.
    pub symbol_count: usize,
    /// Bytes consumed per candidate raw value.
    pub index_width: usize,
    /// Largest value representable in `index_width` bytes.
    pub max_raw_value: u64,
    /// Raw values at or above this are rejected. Always a non-zero multiple
    /// of `symbol_count`.
    pub rejection_threshold: u64,
}

impl Sizing {
    pub fn new(symbol_count: usize) -> Result<Self, ConfigError> {
        if symbol_count == 0 {
            return Err(ConfigError::EmptyCharset);
        }
        if symbol_count > MAX_SYMBOLS {
            return Err(ConfigError::TooManySymbols(symbol_count));
        }
        let (index_width, max_raw_value) = bytes_per_index(symbol_count);
        let rejection_threshold = rejection_threshold(max_raw_value, symbol_count);
        debug_assert!(rejection_threshold > 0);
        debug_assert_eq!(rejection_threshold % symbol_count as u64, 0);
        Ok(Self {
            symbol_count,
            index_width,
            max_raw_value,
            rejection_threshold,
        })
    }

    /// Ratio of the raw value range to the accepted range, never below 1.
    pub fn inflation_factor(&self) -> f64 {
        let factor = self.max_raw_value as f64 / self.rejection_threshold as f64;
        factor.max(1.0)
    }

    /// Bytes of entropy expected to yield `target_length` accepted symbols.
    ///
    /// This is an estimate. Rejections are random and a pass may still come
    /// up short.
    pub fn required_bytes(&self, target_length: usize) -> usize {
        if target_length == 0 {
            return 0;
        }
        let symbols = (self.inflation_factor() * target_length as f64).ceil() as usize;
        symbols.max(target_length).saturating_mul(self.index_width)
    }

    /// Whether a raw value falls in the biased tail and must be skipped.
    #[inline]
    pub fn rejects(&self, value: u64) -> bool {
        value >= self.rejection_threshold
    }
}

/// Smallest byte width whose value range strictly exceeds `symbol_count`,
/// together with the largest value that width can hold.
pub fn bytes_per_index(symbol_count: usize) -> (usize, u64) {
    let mut permutations: u64 = 1;
    let mut width = 0;
    while permutations <= symbol_count as u64 {
        permutations *= BYTE_VALUES;
        width += 1;
    }
    (width, permutations - 1)
}

/// Largest multiple of `symbol_count` that fits in the `max_raw_value + 1`
/// possible raw values.
///
/// When `symbol_count` divides the range exactly this is `max_raw_value + 1`
/// and no value is ever rejected.
pub fn rejection_threshold(max_raw_value: u64, symbol_count: usize) -> u64 {
    let count = symbol_count as u64;
    let range = max_raw_value + 1;
    range - (range % count)
}

/// Read a window of at most [`ACCUMULATOR_BYTES`] bytes as a big-endian
/// unsigned integer, zero-padding the most significant side.
#[inline]
pub fn read_index(window: &[u8]) -> u64 {
    debug_assert!(window.len() <= ACCUMULATOR_BYTES);
    let mut acc = [0u8; ACCUMULATOR_BYTES];
    acc[ACCUMULATOR_BYTES - window.len()..].copy_from_slice(window);
    u64::from_be_bytes(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_never_rejects() {
        let s = Sizing::new(16).unwrap();
        assert_eq!(s.index_width, 1);
        assert_eq!(s.max_raw_value, 255);
        assert_eq!(s.rejection_threshold, 256);
        assert!(!s.rejects(255));
        assert_eq!(s.required_bytes(64), 64);
    }

    #[test]
    fn base62_threshold() {
        let s = Sizing::new(62).unwrap();
        assert_eq!(s.index_width, 1);
        assert_eq!(s.rejection_threshold, 248);
        assert!(s.rejects(248));
        assert!(!s.rejects(247));
        // 255 / 248 * 32 = 32.9
        assert_eq!(s.required_bytes(32), 33);
    }

    #[test]
    fn single_symbol_still_consumes_a_byte() {
        let s = Sizing::new(1).unwrap();
        assert_eq!(s.index_width, 1);
        assert_eq!(s.rejection_threshold, 256);
        assert_eq!(s.required_bytes(5), 5);
    }

    #[test]
    fn width_grows_past_a_byte() {
        assert_eq!(bytes_per_index(255), (1, 255));
        assert_eq!(bytes_per_index(256), (2, 65_535));
        assert_eq!(bytes_per_index(65_536), (3, 16_777_215));

        let s = Sizing::new(300).unwrap();
        assert_eq!(s.index_width, 2);
        assert_eq!(s.rejection_threshold, 65_400);
        assert_eq!(s.required_bytes(1), 4);
    }

    #[test]
    fn zero_symbols_never_reach_sizing() {
        assert_eq!(Sizing::new(0), Err(ConfigError::EmptyCharset));
        assert_eq!(
            Sizing::new(MAX_SYMBOLS + 1),
            Err(ConfigError::TooManySymbols(MAX_SYMBOLS + 1))
        );
    }

    #[test]
    fn zero_length_needs_no_entropy() {
        assert_eq!(Sizing::new(62).unwrap().required_bytes(0), 0);
    }

    #[test]
    fn read_index_pads_high_side() {
        assert_eq!(read_index(&[0x01]), 1);
        assert_eq!(read_index(&[0xFF]), 255);
        assert_eq!(read_index(&[0x01, 0x2C]), 300);
        assert_eq!(read_index(&[0xFF, 0x78]), 65_400);
        assert_eq!(read_index(&[0x80, 0x00, 0x00]), 0x80_0000);
        assert_eq!(read_index(&[]), 0);
    }
}
