use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use secrecy::ExposeSecret;
use secrecy::SecretString;

/// User unique identifier, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registered app identifier. Zero is never a valid app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppId(pub i32);

impl AppId {
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registered user.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Registered client app and its token signing secret.
///
/// Provisioned out of band. The secret is redacted from `Debug` output and is
/// only exposed as raw bytes to sign or verify tokens.
#[derive(Debug)]
pub struct App {
    pub id: AppId,
    pub name: String,
    secret: SecretString,
}

impl App {
    pub fn new(id: AppId, name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Symmetric key used to sign this app's session tokens.
    pub fn signing_key(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Command to register a new user. Fields are raw, validated by the service.
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Command to authenticate a user for a given app.
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub app_id: AppId,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>, app_id: AppId) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            app_id,
        }
    }
}

/// Command to check a session token against the app it claims to be for.
pub struct ValidateTokenCommand {
    pub token: String,
    pub app_id: AppId,
}

impl ValidateTokenCommand {
    pub fn new(token: impl Into<String>, app_id: AppId) -> Self {
        Self {
            token: token.into(),
            app_id,
        }
    }
}

/// Signed session token returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity carried by a token that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
    pub user_id: UserId,
    pub email: String,
    pub app_id: AppId,
    pub expires_at: i64,
}

impl From<auth::Claims> for VerifiedSession {
    fn from(claims: auth::Claims) -> Self {
        Self {
            user_id: UserId(claims.uid),
            email: claims.email,
            app_id: AppId(claims.app_id),
            expires_at: claims.exp,
        }
    }
}
