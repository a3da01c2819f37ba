use tonic::Status;

use crate::domain::identity::errors::AuthError;

pub mod login;
pub mod register;
pub mod validate_token;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidArgument(_) | AuthError::InvalidCredentials => {
                Status::invalid_argument(err.to_string())
            }
            AuthError::AlreadyExists => Status::already_exists(err.to_string()),
            AuthError::AppNotFound => Status::not_found(err.to_string()),
            AuthError::InvalidToken => Status::unauthenticated(err.to_string()),
            AuthError::Internal(_) => Status::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;
    use crate::domain::identity::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        let status = Status::from(AuthError::from(ValidationError::AppIdRequired));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "app_id is required");

        let status = Status::from(AuthError::AlreadyExists);
        assert_eq!(status.code(), Code::AlreadyExists);
        assert_eq!(status.message(), "user already exists");

        let status = Status::from(AuthError::InvalidCredentials);
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "invalid email or password");

        assert_eq!(Status::from(AuthError::AppNotFound).code(), Code::NotFound);
        assert_eq!(
            Status::from(AuthError::InvalidToken).code(),
            Code::Unauthenticated
        );
    }

    #[test]
    fn test_internal_status_hides_detail() {
        let status = Status::from(AuthError::Internal("database is locked".to_string()));

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "internal error");
    }
}
