//! Hours feed error types.

/// Longest response body prefix kept in an error.
pub(crate) const MAX_ERROR_BODY_CHARS: usize = 500;

/// Broad classification of a [`FetchError`].
///
/// Hosts usually only need to know which of these happened: a network
/// problem is worth retrying on the next refresh, a decode problem means
/// the feed changed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport failure, timeout, or a non-success HTTP status.
    NetworkFailure,
    /// The response body did not match the expected feed shape.
    DecodeFailure,
    /// The caller abandoned the fetch before it completed.
    Cancelled,
}

/// Errors that can occur when fetching the hours feed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response was not a valid hours feed
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// Fetch was cancelled by the caller
    #[error("fetch cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Http(_) | FetchError::Timeout | FetchError::Status { .. } => {
                FetchErrorKind::NetworkFailure
            }
            FetchError::Decode { .. } => FetchErrorKind::DecodeFailure,
            FetchError::Cancelled => FetchErrorKind::Cancelled,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = FetchError::Decode {
            message: "missing field `locations`".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: missing field `locations`");

        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(FetchError::Cancelled.to_string(), "fetch cancelled");
    }

    #[test]
    fn kinds() {
        assert_eq!(FetchError::Timeout.kind(), FetchErrorKind::NetworkFailure);
        assert_eq!(
            FetchError::Status {
                status: 500,
                message: String::new()
            }
            .kind(),
            FetchErrorKind::NetworkFailure
        );
        assert_eq!(
            FetchError::Decode {
                message: String::new(),
                body: None
            }
            .kind(),
            FetchErrorKind::DecodeFailure
        );
        assert_eq!(FetchError::Cancelled.kind(), FetchErrorKind::Cancelled);
    }
}
