//! `Stats` tracks how much entropy a sampling run consumed and how much of
//! it was rejected. It does no logging of its own.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Entropy draws made, one per pass over a buffer.
    pub passes: u64,
    pub bytes_drawn: u64,
    pub accepted: u64,
    /// Windows skipped because their value fell in the biased tail.
    pub rejected: u64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_pass(&mut self, bytes: usize) {
        self.passes += 1;
        self.bytes_drawn += bytes as u64;
    }

    pub fn log_window(&mut self, accepted: bool) {
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }

    /// Fraction of inspected windows that were rejected.
    pub fn rejection_rate(&self) -> f64 {
        let total = self.accepted + self.rejected;
        if total == 0 {
            0.0
        } else {
            self.rejected as f64 / total as f64
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drew {} bytes in {} passes, accepted {}, rejected {} ({:.2}%)",
            self.bytes_drawn,
            self.passes,
            self.accepted,
            self.rejected,
            self.rejection_rate() * 100.0
        )
    }
}
