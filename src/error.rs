use thiserror::Error;

/// Failures surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum Error {
    /// The population size read from stdin was not an unsigned integer.
    #[error("invalid population size {input:?}: expected an unsigned integer")]
    InvalidSize { input: String },

    /// Reading the prompt reply failed.
    #[error("failed to read population size: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_message() {
        let err = Error::InvalidSize {
            input: "ten".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid population size \"ten\": expected an unsigned integer"
        );
    }

    #[test]
    fn test_io_message() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
        assert!(err.to_string().starts_with("failed to read population size:"));
    }
}
