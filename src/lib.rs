//! Cryptographically secure tokens drawn uniformly from any character set.
//!
//! Random bytes are mapped to charset indices with rejection sampling, so
//! charsets whose size is not a power of two carry no modulo bias.

pub mod charset;
pub mod config;
pub mod entropy;
pub mod error;
pub mod io_utils;
pub mod provider;
pub mod sampler;
pub mod sizing;
pub mod stats;

pub use charset::{Charset, BASE62, BASE64, DEFAULT_CHARSET, HEX};
pub use config::Config;
pub use entropy::{EntropySource, OsEntropy, ReaderEntropy, RngEntropy};
pub use error::{ConfigError, TokengenError};
pub use provider::{TokenProvider, Tokengen};
pub use sampler::{Sampler, MAX_ENTROPY_DRAW};
pub use sizing::{read_index, Sizing};
pub use stats::Stats;
