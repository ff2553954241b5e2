use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;

use cribwise_api::auth::jwt::{generate_access_token, JwtConfig};
use cribwise_api::config::ServerConfig;
use cribwise_api::router::build_app_router;
use cribwise_api::state::AppState;
use cribwise_db::models::profile::{CreateUserProfile, UserProfile};
use cribwise_db::repositories::ProfileRepo;
use cribwise_db::store::PgChecklistStore;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        checklist_store: Arc::new(PgChecklistStore::new(pool)),
    };
    build_app_router(state, &config)
}

/// Mint a Bearer token value for the given user, matching what the hosted
/// auth provider would issue.
pub fn bearer(user_id: i64, role: &str) -> String {
    let token = generate_access_token(user_id, role, &test_config().jwt)
        .expect("token generation should succeed");
    format!("Bearer {token}")
}

/// Insert a profile row and return it.
pub async fn seed_profile(pool: &PgPool, display_name: &str) -> UserProfile {
    ProfileRepo::create(
        pool,
        &CreateUserProfile {
            display_name: display_name.to_string(),
            university: Some("University of Lagos".to_string()),
        },
    )
    .await
    .expect("profile insert should succeed")
}

/// Build a JSON request with an Authorization header.
pub fn json_request(method: &str, uri: &str, auth: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", auth)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

/// Collect a response body into parsed JSON.
pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
