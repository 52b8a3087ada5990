// ABOUTME: Custom error types for the lnr SDK with user-friendly messages
// ABOUTME: Maps transport, decode, and API-reported failures to distinct variants

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LnrError {
    #[error("Authentication failed. Check your LINEAR_API_KEY")]
    Auth,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: request took too long to complete")]
    Timeout,

    /// The response carried a non-empty `errors` array. Every message the
    /// server reported is kept so the user sees the raw failure list.
    #[error("Linear API error: {}", .messages.join("; "))]
    Api { messages: Vec<String> },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LnrError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            LnrError::Auth => Some("Get your API key from: https://linear.app/settings/api"),
            LnrError::Network(_) => Some("Check your internet connection and try again"),
            LnrError::Timeout => Some("Try again or check your network connection"),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LnrError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LnrError::Timeout
        } else if err.is_decode() {
            LnrError::InvalidResponse(err.to_string())
        } else if err.status().map(|s| s.as_u16()) == Some(401) {
            LnrError::Auth
        } else {
            LnrError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LnrError {
    fn from(err: serde_json::Error) -> Self {
        LnrError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LnrError::Auth.to_string(),
            "Authentication failed. Check your LINEAR_API_KEY"
        );
        assert_eq!(
            LnrError::Network("Connection refused".to_string()).to_string(),
            "Network error: Connection refused"
        );
        assert_eq!(
            LnrError::Configuration("bad URL".to_string()).to_string(),
            "Configuration error: bad URL"
        );
    }

    #[test]
    fn test_api_error_joins_all_messages() {
        let err = LnrError::Api {
            messages: vec!["first failure".to_string(), "second failure".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Linear API error: first failure; second failure"
        );
    }

    #[test]
    fn test_help_text() {
        assert_eq!(
            LnrError::Auth.help_text(),
            Some("Get your API key from: https://linear.app/settings/api")
        );
        assert!(LnrError::Network("test".to_string()).help_text().is_some());
        assert!(
            LnrError::Api {
                messages: vec!["x".to_string()]
            }
            .help_text()
            .is_none()
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: LnrError = json_err.into();
        assert!(matches!(err, LnrError::InvalidResponse(_)));
    }
}
