use crate::charset::Charset;
use crate::config::Config;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{ConfigError, TokengenError};
use crate::sampler::Sampler;

/// Anything that can hand out fresh tokens.
pub trait TokenProvider {
    fn generate_token(&self) -> Result<String, TokengenError>;
}

/// Generates cryptographically secure tokens of a fixed length, every
/// symbol picked with equal probability from the charset.
///
/// ```
/// use tokengen::{Tokengen, DEFAULT_CHARSET};
///
/// let tg = Tokengen::new(DEFAULT_CHARSET, 40).unwrap();
/// let password = tg.generate_token().unwrap();
/// assert_eq!(password.chars().count(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct Tokengen {
    sampler: Sampler,
}

impl Tokengen {
    /// Validate `length` and `charset`. A negative length, an empty charset
    /// or a repeated symbol is a [`ConfigError`].
    pub fn new<L: TryInto<usize>>(charset: &str, length: L) -> Result<Self, ConfigError> {
        let length = length.try_into().map_err(|_| ConfigError::InvalidLength)?;
        let sampler = Sampler::new(Charset::new(charset)?, length)?;
        Ok(Self { sampler })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let sampler = Sampler::new(Charset::new(&config.charset)?, config.length)?
            .with_max_draw(config.max_draw_bytes);
        Ok(Self { sampler })
    }

    pub fn charset(&self) -> &Charset {
        self.sampler.charset()
    }

    pub fn length(&self) -> usize {
        self.sampler.length()
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Generate a token from the operating system CSPRNG.
    pub fn generate_token(&self) -> Result<String, TokengenError> {
        self.generate_token_with(&mut OsEntropy)
    }

    /// Generate a token from a caller supplied entropy source.
    pub fn generate_token_with<S>(&self, source: &mut S) -> Result<String, TokengenError>
    where
        S: EntropySource + ?Sized,
    {
        self.sampler.sample(source)
    }
}

impl TokenProvider for Tokengen {
    fn generate_token(&self) -> Result<String, TokengenError> {
        Tokengen::generate_token(self)
    }
}
