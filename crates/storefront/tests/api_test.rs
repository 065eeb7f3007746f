//! End-to-end tests for the HTTP surface.
//!
//! The router runs against an in-memory user store with the real password
//! hashing and token issuing in between, so these cover the full
//! register/login contract without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Duration;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::User;
use storefront_lib::repository::UserRepository;
use storefront_lib::routes::create_router;
use storefront_lib::services::{Authenticator, TokenIssuer};
use storefront_lib::state::AppState;

/// In-memory user store keyed by email, mirroring the unique-index behavior
/// of the real table.
#[derive(Default)]
struct InMemoryUsers {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&email) {
            return Err(AppError::conflict("User"));
        }

        let user = User::new(
            Uuid::new_v4(),
            email.clone(),
            password_hash,
            first_name,
            last_name,
        );
        users.insert(email, user.clone());
        Ok(user)
    }
}

fn app() -> axum::Router {
    let users = Arc::new(InMemoryUsers::default());
    let tokens =
        TokenIssuer::new("test-secret-key-for-testing-only-32chars", Duration::hours(1)).unwrap();
    let state = AppState {
        auth_service: Arc::new(Authenticator::new(users, tokens)),
        db: sea_orm::DatabaseConnection::default().into(),
    };

    create_router(state)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn register_body() -> Value {
    json!({
        "email": "a@x.com",
        "password": "Secret1",
        "firstName": "A",
        "lastName": "B",
    })
}

#[tokio::test]
async fn test_register_login_wrong_password_duplicate_flow() {
    let app = app();

    // Register
    let response = app
        .clone()
        .oneshot(post_json("/register", &register_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["firstName"], "A");
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());

    // Login with the same credentials
    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            &json!({"email": "a@x.com", "password": "Secret1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    // Login with a wrong password
    let response = app
        .clone()
        .oneshot(post_json(
            "/login",
            &json!({"email": "a@x.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert!(body.get("accessToken").is_none());
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");

    // Register the same email again
    let response = app
        .clone()
        .oneshot(post_json("/register", &register_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_look_identical() {
    let app = app();

    app.clone()
        .oneshot(post_json("/register", &register_body()))
        .await
        .unwrap();

    let wrong_password = app
        .clone()
        .oneshot(post_json(
            "/login",
            &json!({"email": "a@x.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    let unknown_email = app
        .clone()
        .oneshot(post_json(
            "/login",
            &json!({"email": "nobody@x.com", "password": "Secret1"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same status and same body: no user enumeration
    assert_eq!(
        body_json(wrong_password).await,
        body_json(unknown_email).await
    );
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = app();

    // Malformed email
    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            &json!({
                "email": "not-an-email",
                "password": "Secret1",
                "firstName": "A",
                "lastName": "B",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Whitespace-only first name
    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            &json!({
                "email": "a@x.com",
                "password": "Secret1",
                "firstName": "   ",
                "lastName": "B",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing field entirely
    let response = app
        .clone()
        .oneshot(post_json(
            "/register",
            &json!({"email": "a@x.com", "password": "Secret1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_validation_error_on_malformed_email() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/login",
            &json!({"email": "not-an-email", "password": "Secret1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
