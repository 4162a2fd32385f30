use thiserror::Error;

/// Failure modes of an API call.
///
/// Everything except the 401 recovery in the client propagates unchanged to
/// the calling page, which owns the user-facing messaging. No retries happen
/// at this layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_401_counts_as_unauthorized() {
        let unauthorized = ApiError::Status {
            status: 401,
            message: "expired".into(),
        };
        let forbidden = ApiError::Status {
            status: 403,
            message: "nope".into(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Timeout.is_unauthorized());
    }
}
