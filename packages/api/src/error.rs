//! Error type shared by every call into the backend.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a backend request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Raw response body, when one could be read.
        body: Option<String>,
    },
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not have the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the caller as not authenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Human-readable `detail` message from a JSON error body.
    ///
    /// Only string details are returned; structured validation errors yield `None`.
    pub fn detail(&self) -> Option<String> {
        let Self::Status { body: Some(body), .. } = self else {
            return None;
        };
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail {
            serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status {
                status: status.as_u16(),
                body: None,
            }
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, body: Option<&str>) -> ApiError {
        ApiError::Status {
            status,
            body: body.map(str::to_string),
        }
    }

    #[test]
    fn test_detail_from_json_body() {
        let err = status(400, Some(r#"{"detail": "Already applied"}"#));
        assert_eq!(err.detail().as_deref(), Some("Already applied"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_detail_missing_or_unusable() {
        assert_eq!(status(400, None).detail(), None);
        assert_eq!(status(500, Some("Internal Server Error")).detail(), None);
        assert_eq!(status(422, Some(r#"{"detail": [{"loc": ["query"]}]}"#)).detail(), None);
        assert_eq!(status(400, Some(r#"{"detail": ""}"#)).detail(), None);
        assert_eq!(ApiError::Network("offline".into()).detail(), None);
    }

    #[test]
    fn test_unauthorized_only_for_401() {
        assert!(status(401, None).is_unauthorized());
        assert!(!status(403, None).is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
