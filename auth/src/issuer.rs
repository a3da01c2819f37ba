use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Identity a session token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub uid: i64,
    pub email: String,
    pub app_id: i32,
}

/// Signed token together with its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Session token issuer.
///
/// Holds only the process-wide time-to-live. The signing secret is supplied
/// per call so that every app signs with its own key.
#[derive(Debug, Clone, Copy)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer producing tokens valid for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Configured token time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Build and sign claims for `subject`.
    ///
    /// # Arguments
    /// * `subject` - Verified identity and target app
    /// * `secret` - Signing secret of the target app
    /// * `now` - Issuance instant, `exp` is `now + ttl`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed or `now + ttl` is out of range
    pub fn issue(
        &self,
        subject: &TokenSubject,
        secret: &[u8],
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            JwtError::EncodingFailed(format!("expiry overflows with ttl of {}", self.ttl))
        })?;
        let claims = Claims::new(subject.uid, subject.email.as_str(), subject.app_id, expires_at);
        let token = JwtHandler::new(secret).encode(&claims)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature and expiry of a token with the given secret.
    ///
    /// # Errors
    /// * `TokenExpired` - Token lifetime elapsed
    /// * `InvalidSignature` - Token was not signed with `secret`
    /// * `DecodingFailed` - Token is malformed
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        JwtHandler::new(secret).decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> TokenSubject {
        TokenSubject {
            uid: 17,
            email: "carol@example.com".to_string(),
            app_id: 1,
        }
    }

    #[test]
    fn test_issue_sets_claims_and_expiry() {
        let issuer = TokenIssuer::new(Duration::minutes(30));
        let now = Utc::now();

        let issued = issuer
            .issue(&subject(), b"test-secret", now)
            .expect("Failed to issue token");
        let claims = issuer
            .verify(&issued.token, b"test-secret")
            .expect("Failed to verify token");

        assert_eq!(claims.uid, 17);
        assert_eq!(claims.email, "carol@example.com");
        assert_eq!(claims.app_id, 1);
        assert_eq!(claims.exp, (now + Duration::minutes(30)).timestamp());
        assert_eq!(issued.expires_at, now + Duration::minutes(30));
    }

    #[test]
    fn test_issue_is_deterministic() {
        let issuer = TokenIssuer::new(Duration::hours(1));
        let now = Utc::now();

        let first = issuer.issue(&subject(), b"test-secret", now).unwrap();
        let second = issuer.issue(&subject(), b"test-secret", now).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_secret_not_embedded_in_token() {
        let issuer = TokenIssuer::new(Duration::hours(1));

        let issued = issuer
            .issue(&subject(), b"very-distinctive-secret", Utc::now())
            .unwrap();

        assert!(!issued.token.contains("very-distinctive-secret"));
        let payload = issued.token.split('.').nth(1).unwrap();
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_token_for_one_app_fails_with_other_secret() {
        let issuer = TokenIssuer::new(Duration::hours(1));

        let issued = issuer
            .issue(&subject(), b"secret-of-app-a", Utc::now())
            .unwrap();

        assert_eq!(
            issuer.verify(&issued.token, b"secret-of-app-b"),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_issue_with_overflowing_ttl() {
        let issuer = TokenIssuer::new(Duration::seconds(10_000_000_000_000));

        let result = issuer.issue(&subject(), b"test-secret", Utc::now());

        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }

    #[test]
    fn test_verify_elapsed_token() {
        let issuer = TokenIssuer::new(Duration::minutes(5));

        let issued = issuer
            .issue(&subject(), b"test-secret", Utc::now() - Duration::minutes(10))
            .unwrap();

        assert_eq!(
            issuer.verify(&issued.token, b"test-secret"),
            Err(JwtError::TokenExpired)
        );
    }
}
