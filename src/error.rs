use thiserror::Error;

/// Rejected sampler configuration. Raised before any entropy is consumed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The charset has no symbols to draw from.
    #[error("character set too small")]
    EmptyCharset,

    /// Length was negative or does not fit in `usize`.
    #[error("length cannot be negative")]
    InvalidLength,

    /// A symbol appears more than once and would be drawn twice as often.
    #[error("duplicate symbol {0:?} in character set")]
    DuplicateSymbol(char),

    /// More symbols than there are distinct `char` values.
    #[error("character set of {0} symbols is too large")]
    TooManySymbols(usize),
}

#[derive(Error, Debug)]
pub enum TokengenError {
    /// Invalid charset or length.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The entropy source could not supply the requested bytes.
    #[error("entropy source error: {0}")]
    Entropy(#[from] std::io::Error),
}
