//! Error types for ryc

use thiserror::Error;

/// Main error type for ryc operations
#[derive(Debug, Error)]
pub enum RycError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("No channel found for handle: {0}")]
    ChannelNotFound(String),

    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl RycError {
    /// Check if error was caused by user input rather than the network or disk
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RycError::MissingCredential | RycError::ChannelNotFound(_) | RycError::InvalidUrl(_)
        )
    }

    /// Check if error came from talking to the remote API
    pub fn is_transport_error(&self) -> bool {
        matches!(self, RycError::Transport(_) | RycError::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors() {
        assert!(RycError::MissingCredential.is_input_error());
        assert!(RycError::ChannelNotFound("@nobody".to_string()).is_input_error());
        assert!(RycError::InvalidUrl("https://example.com".to_string()).is_input_error());

        let api = RycError::Api {
            status: 403,
            message: "quotaExceeded".to_string(),
        };
        assert!(!api.is_input_error());
        assert!(api.is_transport_error());
    }

    #[test]
    fn test_io_error_is_local() {
        let err = RycError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(!err.is_input_error());
        assert!(!err.is_transport_error());
        assert_eq!(err.to_string(), "IO error: disk full");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RycError::ChannelNotFound("@nobody".to_string()).to_string(),
            "No channel found for handle: @nobody"
        );
        assert_eq!(
            RycError::Api {
                status: 400,
                message: "Bad Request".to_string()
            }
            .to_string(),
            "API error 400: Bad Request"
        );
    }
}
