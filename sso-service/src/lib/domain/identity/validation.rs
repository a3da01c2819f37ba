//! Request shape checks. Rules run in order and the first failure wins.

use crate::domain::identity::errors::ValidationError;
use crate::domain::identity::models::AppId;

pub fn validate_register(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str, app_id: AppId) -> Result<(), ValidationError> {
    validate_register(email, password)?;
    if app_id.is_unset() {
        return Err(ValidationError::AppIdRequired);
    }
    Ok(())
}

pub fn validate_token_request(token: &str, app_id: AppId) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::TokenRequired);
    }
    if app_id.is_unset() {
        return Err(ValidationError::AppIdRequired);
    }
    Ok(())
}
