use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "Check that the file is valid JSON.",
        _ => "Check that the file is readable.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn tokengen_cli_error(context: &str, err: crate::TokengenError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &crate::TokengenError) -> String {
    use crate::{ConfigError, TokengenError};
    match err {
        TokengenError::Config(ConfigError::EmptyCharset) => {
            "character set too small. Pass at least one symbol.".to_string()
        }
        TokengenError::Config(ConfigError::DuplicateSymbol(c)) => {
            format!("symbol {c:?} appears more than once. Remove the repeat.")
        }
        TokengenError::Config(e) => format!("{e}. Invalid configuration."),
        TokengenError::Entropy(io) if io.kind() == io::ErrorKind::UnexpectedEof => {
            format!("{io}. Entropy file ran out, supply more random bytes.")
        }
        TokengenError::Entropy(io) => format!("{io}. Entropy source unavailable."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, TokengenError};

    #[test]
    fn hints_mention_the_fix() {
        let err = TokengenError::Config(ConfigError::DuplicateSymbol('x'));
        assert!(cli_hint(&err).contains("Remove the repeat"));

        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer");
        let err = TokengenError::Entropy(eof);
        assert!(cli_hint(&err).contains("Entropy file ran out"));
    }

    #[test]
    fn io_error_names_path() {
        let err = io_cli_error(
            "reading config",
            Path::new("missing.json"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("missing.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
