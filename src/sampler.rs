//! Unbiased mapping of random bytes onto charset symbols.
//!
//! Each pass draws enough entropy for the symbols still missing, then walks
//! the buffer one window of `index_width` bytes at a time. A window whose
//! value lands in the biased tail is skipped by sliding a single byte
//! forward; an accepted window yields `value % symbol_count` and the walk
//! jumps a full window. Passes repeat until the token is complete or the
//! entropy source fails.

use tracing::{debug, trace};

use crate::charset::Charset;
use crate::entropy::EntropySource;
use crate::error::{ConfigError, TokengenError};
use crate::sizing::{read_index, Sizing};
use crate::stats::Stats;

/// Upper bound on the bytes requested from the source in one pass.
pub const MAX_ENTROPY_DRAW: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct Sampler {
    charset: Charset,
    length: usize,
    sizing: Sizing,
    max_draw: usize,
}

impl Sampler {
    pub fn new(charset: Charset, length: usize) -> Result<Self, ConfigError> {
        let sizing = Sizing::new(charset.len())?;
        Ok(Self {
            charset,
            length,
            sizing,
            max_draw: MAX_ENTROPY_DRAW,
        })
    }

    /// Cap a single entropy draw at `bytes`, rounded down to whole windows.
    /// A draw always covers at least one window.
    pub fn with_max_draw(mut self, bytes: usize) -> Self {
        self.max_draw = bytes;
        self
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }

    /// Draw a token of exactly `length()` symbols.
    pub fn sample<S>(&self, source: &mut S) -> Result<String, TokengenError>
    where
        S: EntropySource + ?Sized,
    {
        self.sample_with_stats(source, &mut Stats::new())
    }

    /// Like [`Sampler::sample`], recording entropy use into `stats`.
    ///
    /// On a source failure nothing is returned, even if earlier passes had
    /// already accepted symbols.
    pub fn sample_with_stats<S>(
        &self,
        source: &mut S,
        stats: &mut Stats,
    ) -> Result<String, TokengenError>
    where
        S: EntropySource + ?Sized,
    {
        let mut output = String::with_capacity(self.length.min(MAX_ENTROPY_DRAW));
        let mut produced = 0;
        let mut passes = 0u32;
        let mut buf = Vec::new();

        while produced < self.length {
            let remaining = self.length - produced;
            let draw = self.draw_size(remaining);
            buf.clear();
            buf.resize(draw, 0);
            source.fill(&mut buf)?;
            stats.tick_pass(draw);
            passes += 1;
            if passes > 1 {
                debug!(remaining, draw, passes, "entropy shortfall, drawing again");
            } else {
                trace!(remaining, draw, "drawing entropy");
            }
            produced += self.scan(&buf, remaining, &mut output, stats);
        }

        Ok(output)
    }

    fn draw_size(&self, remaining: usize) -> usize {
        let width = self.sizing.index_width;
        let cap = (self.max_draw / width * width).max(width);
        self.sizing.required_bytes(remaining).min(cap)
    }

    /// Map windows of `buf` to symbols until `wanted` are accepted or the
    /// buffer runs out. Returns the number accepted.
    fn scan(&self, buf: &[u8], wanted: usize, out: &mut String, stats: &mut Stats) -> usize {
        let width = self.sizing.index_width;
        let count = self.sizing.symbol_count as u64;
        let mut accepted = 0;
        let mut i = 0;

        while accepted < wanted && i + width <= buf.len() {
            let value = read_index(&buf[i..i + width]);
            if self.sizing.rejects(value) {
                stats.log_window(false);
                i += 1;
                continue;
            }
            out.push(self.charset.symbol((value % count) as usize));
            stats.log_window(true);
            accepted += 1;
            i += width;
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ReaderEntropy;
    use std::io::Cursor;

    fn sampler(symbols: &str, length: usize) -> Sampler {
        Sampler::new(Charset::new(symbols).unwrap(), length).unwrap()
    }

    #[test]
    fn draw_is_capped_to_whole_windows() {
        let chars: String = (0..300u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let s = sampler(&chars, 10_000).with_max_draw(7);
        assert_eq!(s.draw_size(10_000), 6);
        let s = s.with_max_draw(1);
        assert_eq!(s.draw_size(10_000), 2);
        assert_eq!(s.draw_size(1), 2);
    }

    #[test]
    fn partial_trailing_window_is_dropped() {
        let chars: String = (0..300u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        let s = sampler(&chars, 1);
        let mut out = String::new();
        let mut stats = Stats::new();
        // 0xFFFF rejected, slide to 0xFF alone: not a full window
        let n = s.scan(&[0xFF, 0xFF, 0xFF], 1, &mut out, &mut stats);
        assert_eq!(n, 0);
        assert!(out.is_empty());
        assert_eq!(stats.rejected, 2);
    }

    #[test]
    fn scan_stops_at_wanted() {
        let s = sampler("ab", 2);
        let mut out = String::new();
        let n = s.scan(&[0, 1, 0, 1], 2, &mut out, &mut Stats::new());
        assert_eq!(n, 2);
        assert_eq!(out, "ab");
    }

    #[test]
    fn sample_counts_passes() {
        let s = sampler("abc", 3);
        let mut src = ReaderEntropy::new(Cursor::new(vec![255u8, 0, 1, 2]));
        let mut stats = Stats::new();
        let token = s.sample_with_stats(&mut src, &mut stats).unwrap();
        assert_eq!(token, "abc");
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.bytes_drawn, 4);
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.rejected, 1);
    }
}
