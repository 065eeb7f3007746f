//! Authentication service - registration and login flows.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{Password, User};

use crate::repository::UserRepository;
use crate::services::token::TokenIssuer;

/// Result of a successful login: an access token plus the authenticated user.
#[derive(Debug)]
pub struct AuthenticatedUser {
    pub access_token: String,
    pub user: User,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(
        &self,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> AppResult<User>;

    /// Login with email and password, returning a fresh access token
    async fn login(&self, email: String, password: String) -> AppResult<AuthenticatedUser>;
}

// Argon2 hash that can never verify; keeps the lookup-miss path as expensive
// as a real mismatch.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl Authenticator {
    /// Create a new auth service instance.
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> AppResult<User> {
        // The DTO layer checks presence and email syntax; whitespace-only
        // names still have to be caught here.
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }

        // Pre-check for an existing user. The unique index on email remains
        // the authority: a concurrent insert of the same address surfaces as
        // the same conflict from the repository.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();

        self.users
            .create(email, password_hash, first_name, last_name)
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<AuthenticatedUser> {
        let user_result = self.users.find_by_email(&email).await?;

        // SECURITY: run a verification even when the user doesn't exist so an
        // unknown email takes as long as a wrong password.
        let password_hash = user_result
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(DUMMY_HASH);
        let password_valid = Password::from_hash(password_hash.to_string()).verify(&password);

        // Unknown email and wrong password must be indistinguishable to the
        // caller.
        let user = match user_result {
            Some(user) => user,
            None => return Err(AppError::InvalidCredentials),
        };

        if !user.is_active() {
            return Err(AppError::AccountInactive);
        }

        if !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let access_token = self.tokens.issue(user.id)?;

        Ok(AuthenticatedUser { access_token, user })
    }
}
