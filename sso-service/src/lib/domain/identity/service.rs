use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenSubject;
use chrono::Utc;

use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::StorageError;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::SessionToken;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::ValidateTokenCommand;
use crate::domain::identity::models::VerifiedSession;
use crate::domain::identity::ports::AppRepository;
use crate::domain::identity::ports::AuthServicePort;
use crate::domain::identity::ports::UserRepository;
use crate::domain::identity::validation;

/// Domain service implementation for registration and login.
///
/// Holds no mutable state. Every call is a single pass over the injected
/// stores, so concurrent calls need no coordination beyond the user store's
/// uniqueness constraint.
pub struct AuthService<UR, AR>
where
    UR: UserRepository,
    AR: AppRepository,
{
    users: Arc<UR>,
    apps: Arc<AR>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

impl<UR, AR> AuthService<UR, AR>
where
    UR: UserRepository,
    AR: AppRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User persistence implementation
    /// * `apps` - App registry implementation
    /// * `token_issuer` - Issuer configured with the process-wide token TTL
    pub fn new(users: Arc<UR>, apps: Arc<AR>, token_issuer: TokenIssuer) -> Self {
        Self {
            users,
            apps,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| internal("password hashing task failed", e))?
            .map_err(|e| internal("password hashing failed", e))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.password_hasher;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| internal("password verification task failed", e))
    }

    /// Spend a full verification when there is no stored hash to check.
    async fn verify_decoy(&self, password: String) -> Result<(), AuthError> {
        let hasher = self.password_hasher;
        tokio::task::spawn_blocking(move || hasher.verify_decoy(&password))
            .await
            .map_err(|e| internal("password verification task failed", e))
    }
}

fn internal(context: &str, err: impl Display) -> AuthError {
    tracing::error!(error = %err, "{}", context);
    AuthError::Internal(format!("{}: {}", context, err))
}

#[async_trait]
impl<UR, AR> AuthServicePort for AuthService<UR, AR>
where
    UR: UserRepository,
    AR: AppRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        validation::validate_register(&command.email, &command.password)?;

        let password_hash = self.hash_password(command.password).await?;

        let user_id = match self.users.save(&command.email, &password_hash).await {
            Ok(user_id) => user_id,
            Err(StorageError::AlreadyExists) => {
                tracing::warn!(email = %command.email, "Registration rejected: user already exists");
                return Err(AuthError::AlreadyExists);
            }
            Err(e) => return Err(internal("failed to save user", e)),
        };

        tracing::info!(user_id = %user_id, "User registered");

        Ok(user_id)
    }

    async fn login(&self, command: LoginCommand) -> Result<SessionToken, AuthError> {
        validation::validate_login(&command.email, &command.password, command.app_id)?;

        let user = match self.users.find_by_email(&command.email).await {
            Ok(user) => user,
            Err(StorageError::NotFound) => {
                // Costs as much as a wrong password.
                self.verify_decoy(command.password).await?;
                tracing::warn!(email = %command.email, "Login rejected: user not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(internal("failed to get user", e)),
        };

        if !self
            .verify_password(command.password, user.password_hash.clone())
            .await?
        {
            tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let app = match self.apps.find_by_id(command.app_id).await {
            Ok(app) => app,
            Err(StorageError::NotFound) => {
                tracing::warn!(app_id = %command.app_id, "Login rejected: app not found");
                return Err(AuthError::AppNotFound);
            }
            Err(e) => return Err(internal("failed to get app", e)),
        };

        let subject = TokenSubject {
            uid: user.id.0,
            email: user.email,
            app_id: app.id.0,
        };
        let issued = self
            .token_issuer
            .issue(&subject, app.signing_key(), Utc::now())
            .map_err(|e| internal("failed to generate token", e))?;

        tracing::info!(user_id = %user.id, app_id = %app.id, "User logged in");

        Ok(SessionToken {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    async fn validate_token(
        &self,
        command: ValidateTokenCommand,
    ) -> Result<VerifiedSession, AuthError> {
        validation::validate_token_request(&command.token, command.app_id)?;

        let app = match self.apps.find_by_id(command.app_id).await {
            Ok(app) => app,
            Err(StorageError::NotFound) => return Err(AuthError::AppNotFound),
            Err(e) => return Err(internal("failed to get app", e)),
        };

        let claims = self
            .token_issuer
            .verify(&command.token, app.signing_key())
            .map_err(|e| {
                tracing::debug!(app_id = %app.id, error = %e, "Token rejected");
                AuthError::InvalidToken
            })?;

        if claims.app_id != app.id.0 {
            tracing::warn!(app_id = %app.id, claimed_app_id = claims.app_id, "Token app mismatch");
            return Err(AuthError::InvalidToken);
        }

        Ok(claims.into())
    }
}
