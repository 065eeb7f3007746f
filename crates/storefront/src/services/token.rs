//! Access token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::MIN_JWT_SECRET_LENGTH;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Issues and verifies signed access tokens bound to a user id.
///
/// Tokens are stateless: validity is the signature plus the embedded expiry,
/// checked at verification time.
pub struct TokenIssuer {
    secret: String,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// The secret must be at least [`MIN_JWT_SECRET_LENGTH`] bytes and the
    /// time-to-live strictly positive.
    pub fn new(secret: impl Into<String>, ttl: Duration) -> AppResult<Self> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if ttl <= Duration::zero() {
            return Err(AppError::internal("Token TTL must be positive"));
        }

        Ok(Self { secret, ttl })
    }

    /// Issue a token for the given subject with the configured TTL.
    pub fn issue(&self, subject: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject,
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Token signing failed: {}", e);
            AppError::internal("Token signing failed")
        })
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;

        Ok(token_data.claims)
    }
}
