use std::time::Duration;

use thiserror::Error;

/// Classified outcome of a failed remote call.
///
/// Application-level failures (`UnexpectedStatus`) are kept distinct from
/// transport failures; callers never see raw transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The bounded wait elapsed before a response arrived.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The target refused the connection.
    #[error("connection refused")]
    ConnectionRefused,

    /// The target answered with a non-success status.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Other(String),
}

impl RemoteError {
    pub(crate) fn classify(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            RemoteError::Timeout(timeout)
        } else if err.is_connect() {
            RemoteError::ConnectionRefused
        } else {
            RemoteError::Other(err.to_string())
        }
    }

    /// Returns true if the failure never left this process cleanly, as
    /// opposed to the peer answering with an unexpected status.
    pub fn is_transport(&self) -> bool {
        !matches!(self, RemoteError::UnexpectedStatus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_is_not_transport() {
        assert!(!RemoteError::UnexpectedStatus(500).is_transport());
        assert!(RemoteError::Timeout(Duration::from_secs(1)).is_transport());
        assert!(RemoteError::ConnectionRefused.is_transport());
        assert!(RemoteError::Other("reset".into()).is_transport());
    }

    #[test]
    fn display_names_the_classification() {
        assert_eq!(
            RemoteError::UnexpectedStatus(503).to_string(),
            "unexpected status 503"
        );
        assert_eq!(
            RemoteError::ConnectionRefused.to_string(),
            "connection refused"
        );
    }
}
