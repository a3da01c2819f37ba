use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token claims.
///
/// Field names are part of the wire format: any holder of the issuing app's
/// secret decodes `uid`, `email`, `app_id` and `exp` from the token payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub uid: i64,

    /// User email as stored
    pub email: String,

    /// Identifier of the app the token was issued for
    pub app_id: i32,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims with an absolute expiration.
    pub fn new(uid: i64, email: impl Into<String>, app_id: i32, expires_at: DateTime<Utc>) -> Self {
        Self {
            uid,
            email: email.into(),
            app_id,
            exp: expires_at.timestamp(),
        }
    }

    /// Create claims expiring `ttl` after `issued_at`.
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    ///
    /// # Arguments
    /// * `uid` - User identifier
    /// * `email` - User email
    /// * `app_id` - Target app identifier
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Token time-to-live
    pub fn expiring_after(
        uid: i64,
        email: impl Into<String>,
        app_id: i32,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(ttl)?;
        Some(Self::new(uid, email, app_id, expires_at))
    }

    /// Expiration as a UTC instant.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
