use thiserror::Error;

/// Input validation failures, checked before any store access.
///
/// The rendered messages are part of the public contract.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,

    #[error("password is required")]
    PasswordRequired,

    #[error("app_id is required")]
    AppIdRequired,

    #[error("token is required")]
    TokenRequired,
}

/// Failure kinds reported by the user and app stores.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("record already exists")]
    AlreadyExists,

    #[error("record not found")]
    NotFound,

    #[error("storage failure: {0}")]
    Database(String),
}

/// Top-level error for register, login and token validation.
///
/// `InvalidCredentials` is returned both for an unknown email and for a wrong
/// password so that callers cannot tell which accounts exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),

    #[error("user already exists")]
    AlreadyExists,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("app not found")]
    AppNotFound,

    #[error("invalid token")]
    InvalidToken,

    /// Unexpected collaborator failure. The detail is for logs only.
    #[error("internal error")]
    Internal(String),
}

impl AuthError {
    /// Underlying detail of an internal failure, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AuthError::Internal(detail) => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_messages() {
        assert_eq!(
            AuthError::from(ValidationError::EmailRequired).to_string(),
            "email is required"
        );
        assert_eq!(
            AuthError::from(ValidationError::PasswordRequired).to_string(),
            "password is required"
        );
        assert_eq!(
            AuthError::from(ValidationError::AppIdRequired).to_string(),
            "app_id is required"
        );
        assert_eq!(AuthError::AlreadyExists.to_string(), "user already exists");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
    }

    #[test]
    fn test_internal_detail_not_rendered() {
        let err = AuthError::Internal("disk I/O error at /var/lib/sso.db".to_string());

        assert_eq!(err.to_string(), "internal error");
        assert_eq!(err.detail(), Some("disk I/O error at /var/lib/sso.db"));
    }
}
