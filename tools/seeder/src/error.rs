//! Classified boundary-service failures.
//!
//! Both boundary services report failures as data rather than exceptions;
//! the adapters classify each one into a kind so stage logic can branch on
//! variants instead of matching on message text.

/// Failure of one auth-admin or tabular-store call, carrying the service
/// message for the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("transient network failure: {0}")]
    TransientNetwork(String),
    #[error("schema violation: {0}")]
    SchemaViolation(String),
    #[error("service error: {0}")]
    Unknown(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::TransientNetwork(_) => "TRANSIENT_NETWORK",
            Self::SchemaViolation(_) => "SCHEMA_VIOLATION",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_kind_for_each_variant() {
        assert_eq!(
            ApiError::AlreadyExists("user01".into()).kind(),
            "ALREADY_EXISTS"
        );
        assert_eq!(
            ApiError::TransientNetwork("timeout".into()).kind(),
            "TRANSIENT_NETWORK"
        );
        assert_eq!(
            ApiError::SchemaViolation("not-null".into()).kind(),
            "SCHEMA_VIOLATION"
        );
        assert_eq!(ApiError::Unknown("teapot".into()).kind(), "UNKNOWN");
    }

    #[test]
    fn should_include_service_message_in_display() {
        let err = ApiError::AlreadyExists("user01@example.com".into());
        assert_eq!(err.to_string(), "already exists: user01@example.com");
    }
}
