//! Credential and session token primitives.
//!
//! Provides the building blocks the identity provider composes:
//! - Password hashing (Argon2id)
//! - Session claims and HS256 token encoding/decoding
//! - Per-app token issuance with a process-wide time-to-live
//!
//! Nothing here touches storage. The caller resolves users and app secrets
//! and hands them in.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Issuing and Verifying Session Tokens
//! ```
//! use auth::{TokenIssuer, TokenSubject};
//! use chrono::{Duration, Utc};
//!
//! let issuer = TokenIssuer::new(Duration::hours(1));
//! let subject = TokenSubject {
//!     uid: 1,
//!     email: "alice@example.com".to_string(),
//!     app_id: 1,
//! };
//!
//! let issued = issuer.issue(&subject, b"app-secret", Utc::now()).unwrap();
//! let claims = issuer.verify(&issued.token, b"app-secret").unwrap();
//! assert_eq!(claims.email, "alice@example.com");
//!
//! // A different app's secret does not validate the token.
//! assert!(issuer.verify(&issued.token, b"another-secret").is_err());
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use issuer::TokenSubject;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
