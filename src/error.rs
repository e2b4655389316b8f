//! Error types for console operations

use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Message shown to the operator when the backend cannot be reached.
pub const CONNECTION_ERROR_MESSAGE: &str = "Erreur de connexion au serveur";

/// Main error type for console operations
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Transport failure while talking to the backend
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error status or an error envelope
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The response body did not match the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request was rejected locally before being sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        ConsoleError::Backend { status, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ConsoleError::Validation(message.into())
    }

    /// The localized text a screen displays for this error.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Http(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            ConsoleError::Backend { message, .. } => message.clone(),
            ConsoleError::Validation(msg) | ConsoleError::Config(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_shown_verbatim() {
        let err = ConsoleError::backend(400, "Le paramètre 'q' est requis");
        assert_eq!(err.user_message(), "Le paramètre 'q' est requis");
        assert_eq!(err.to_string(), "Backend error (400): Le paramètre 'q' est requis");
    }

    #[test]
    fn test_validation_message() {
        let err = ConsoleError::validation("Le champ 'nomComplet' est requis");
        assert_eq!(err.user_message(), "Le champ 'nomComplet' est requis");
    }
}
