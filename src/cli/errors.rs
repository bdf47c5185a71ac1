//! CLI errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Store could not be opened from its connection string
    #[error("{0}")]
    Store(#[from] StoreError),

    /// I/O failure while starting or running the server
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_message_passthrough() {
        let err = CliError::from(StoreError::UnsupportedScheme("x://y".to_string()));
        assert_eq!(err.to_string(), "Unsupported store url: x://y");
    }
}
