//! Error types for the Komet client and CLI

use thiserror::Error;

/// Result type alias for Komet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised by metrics service operations.
///
/// Remote failures and transport failures both surface as [`ApiError::Request`];
/// only the message differs. A success response whose body cannot be decoded
/// is reported separately as [`ApiError::InvalidResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected the call or could not be reached.
    #[error("{0}")]
    Request(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `komet init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message_verbatim() {
        let err = ApiError::Request("name already exists".to_string());
        assert_eq!(err.to_string(), "name already exists");
    }

    #[test]
    fn test_top_level_error_is_transparent_for_api_errors() {
        let err: Error = ApiError::Request("Failed to fetch bottlenecks".to_string()).into();
        assert_eq!(err.to_string(), "Failed to fetch bottlenecks");
    }

    #[test]
    fn test_invalid_response_is_distinct() {
        let err = ApiError::InvalidResponse("missing field `id`".to_string());
        assert!(err.to_string().starts_with("Invalid API response"));
        assert!(matches!(err, ApiError::InvalidResponse(ref m) if m == "missing field `id`"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("komet init"));
    }

    #[test]
    fn test_config_error_invalid() {
        let err = ConfigError::Invalid("bad base address".to_string());
        assert!(err.to_string().contains("bad base address"));
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::NotFound.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
