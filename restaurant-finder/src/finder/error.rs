//! Finder client error types.

/// Errors from talking to the restaurant filter API.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    /// HTTP request failed (connection refused, DNS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a list of restaurants
    #[error("JSON parse error: {message}{}", .body.as_deref().map(|b| format!(" (body: {b})")).unwrap_or_default())]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Mock data could not be loaded
    #[error("mock data error: {0}")]
    MockData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FinderError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = FinderError::Json {
            message: "expected a sequence".into(),
            body: Some("{}".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected a sequence (body: {})"
        );

        let err = FinderError::Json {
            message: "EOF".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: EOF");

        let err = FinderError::MockData("no such file".into());
        assert_eq!(err.to_string(), "mock data error: no such file");
    }
}
