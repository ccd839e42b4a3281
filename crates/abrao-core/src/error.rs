//! Error types for abrao-core

use thiserror::Error;

/// Result type alias for abrao operations
pub type Result<T> = std::result::Result<T, AbraoError>;

/// Main error type for abrao operations
#[derive(Error, Debug)]
pub enum AbraoError {
    /// Backend API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

/// Errors raised while talking to the profile backend.
///
/// The `Display` text is what screens show after their `Erro:` prefix, so
/// keep it short.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, reset)
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The body could not be decoded into the expected document
    #[error("Resposta inválida: {0}")]
    Decode(String),

    /// A request URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl ApiError {
    /// Status code for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided `detail` text, if the error body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// Invalid value
    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            detail: Some("ORCID não encontrado".to_string()),
        };
        assert_eq!(err.to_string(), "Status 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.detail(), Some("ORCID não encontrado"));
    }

    #[test]
    fn test_api_error_wraps_into_abrao_error() {
        let err: AbraoError = ApiError::Network("connection refused".into()).into();
        assert_eq!(err.to_string(), "API error: connection refused");
    }
}
