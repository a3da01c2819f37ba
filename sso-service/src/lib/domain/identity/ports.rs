use async_trait::async_trait;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::StorageError;
use crate::domain::identity::models::App;
use crate::domain::identity::models::AppId;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::SessionToken;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::ValidateTokenCommand;
use crate::domain::identity::models::VerifiedSession;

/// Port for identity service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Raw email and password
    ///
    /// # Returns
    /// Identifier of the created user
    ///
    /// # Errors
    /// * `InvalidArgument` - Email or password missing
    /// * `AlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Authenticate a user and issue a session token for an app.
    ///
    /// # Arguments
    /// * `command` - Raw email, password and target app
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidArgument` - Email, password or app id missing
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `AppNotFound` - No app registered under the id
    /// * `Internal` - Storage or signing failed
    async fn login(&self, command: LoginCommand) -> Result<SessionToken, AuthError>;

    /// Check a token's signature and expiry against the app's secret.
    ///
    /// # Errors
    /// * `InvalidArgument` - Token or app id missing
    /// * `AppNotFound` - No app registered under the id
    /// * `InvalidToken` - Bad signature, malformed or expired token
    /// * `Internal` - Storage failed
    async fn validate_token(
        &self,
        command: ValidateTokenCommand,
    ) -> Result<VerifiedSession, AuthError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of `email` must be enforced atomically by the store so
    /// that concurrent saves of one email cannot both succeed.
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `Database` - Storage operation failed
    async fn save(&self, email: &str, password_hash: &str) -> Result<UserId, StorageError>;

    /// Retrieve a user by exact email.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Database` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<User, StorageError>;
}

/// Read-only lookup of registered apps.
#[async_trait]
pub trait AppRepository: Send + Sync + 'static {
    /// Retrieve an app and its signing secret.
    ///
    /// # Errors
    /// * `NotFound` - No app with this id
    /// * `Database` - Storage operation failed
    async fn find_by_id(&self, id: AppId) -> Result<App, StorageError>;
}
