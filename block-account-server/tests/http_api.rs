//! HTTP surface tests.
//!
//! Drive the real router and service over an in-memory account store, so
//! every status-code contract is exercised without a database.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use serde::Deserialize;
use tower::ServiceExt;

use block_account_api::domain::BlockAccount;
use block_account_db::models::block_account::BlockAccountModel;
use block_account_db::repository::{Create, Delete, FindById, FindByUserId, Ping};
use block_account_server::routes::create_router;
use block_account_server::service::BlockAccountServiceImpl;
use block_account_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Default)]
struct InMemoryRepository {
    accounts: Mutex<Vec<BlockAccountModel>>,
    fail_ping: bool,
}

#[async_trait]
impl Create<BlockAccountModel> for InMemoryRepository {
    async fn create(&self, mut item: BlockAccountModel) -> Result<BlockAccountModel, BoxError> {
        let mut accounts = self.accounts.lock().unwrap();
        item.id = accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        accounts.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl FindById<BlockAccountModel> for InMemoryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<BlockAccountModel>, BoxError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }
}

#[async_trait]
impl FindByUserId<BlockAccountModel> for InMemoryRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<BlockAccountModel>, BoxError> {
        let accounts = self.accounts.lock().unwrap();
        let mut owned: Vec<_> = accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[async_trait]
impl Delete for InMemoryRepository {
    async fn delete(&self, id: i32) -> Result<u64, BoxError> {
        let mut accounts = self.accounts.lock().unwrap();
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        Ok((before - accounts.len()) as u64)
    }
}

#[async_trait]
impl Ping for InMemoryRepository {
    async fn ping(&self) -> Result<(), BoxError> {
        if self.fail_ping {
            return Err("connection refused".into());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: u16,
    #[serde(default)]
    message: Option<String>,
}

fn app() -> Router {
    app_over(InMemoryRepository::default())
}

fn app_over(repository: InMemoryRepository) -> Router {
    let service = BlockAccountServiceImpl::new(Arc::new(repository), Duration::from_secs(5));
    create_router(AppState::new(Arc::new(service)))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_returns_envelope_with_derived_fields() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/block-account",
            r#"{"user_id": 1, "principal": 5000, "period": "1y"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let envelope: Envelope = body_json(response).await;
    assert!(envelope.success);
    assert_eq!(
        envelope.message.as_deref(),
        Some("Block account created successfully")
    );

    let account: BlockAccount = serde_json::from_value(envelope.data.unwrap()).unwrap();
    assert_eq!(account.user_id, 1);
    assert_eq!(account.principal, Decimal::new(5000, 0));
    assert_eq!(account.interest_rate, Decimal::new(5, 2));
    assert_eq!(
        account.end_date - account.start_date,
        chrono::Duration::days(365)
    );
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let response = app()
        .oneshot(post_json("/block-account", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.code, 400);
    assert_eq!(body.error, "Bad Request");
}

#[tokio::test]
async fn test_create_rejects_unknown_period() {
    let response = app()
        .oneshot(post_json(
            "/block-account",
            r#"{"user_id": 1, "principal": 5000, "period": "10y"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(response).await;
    assert!(body.message.unwrap().contains("3m, 6m, 1y, 3y"));
}

#[tokio::test]
async fn test_create_rejects_nonpositive_principal() {
    let response = app()
        .oneshot(post_json(
            "/block-account",
            r#"{"user_id": 1, "principal": -50, "period": "1y"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_round_trips_created_account() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json(
            "/block-account",
            r#"{"user_id": 3, "principal": 1200.50, "period": "6m"}"#,
        ))
        .await
        .unwrap();
    let envelope: Envelope = body_json(created).await;
    let account: BlockAccount = serde_json::from_value(envelope.data.unwrap()).unwrap();

    let response = app
        .oneshot(get(&format!("/block-account/{}", account.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope = body_json(response).await;
    let fetched: BlockAccount = serde_json::from_value(envelope.data.unwrap()).unwrap();
    assert_eq!(fetched, account);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let response = app().oneshot(get("/block-account/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.message.as_deref(), Some("Block account not found"));
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_request() {
    let response = app().oneshot(get("/block-account/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_accounts_lists_only_that_user_newest_first() {
    let app = app();

    for (user_id, period) in [(5, "3m"), (5, "3y"), (6, "1y")] {
        let body = format!(r#"{{"user_id": {user_id}, "principal": 100, "period": "{period}"}}"#);
        let response = app
            .clone()
            .oneshot(post_json("/block-account", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/user/5/block-accounts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope = body_json(response).await;
    let accounts: Vec<BlockAccount> = serde_json::from_value(envelope.data.unwrap()).unwrap();
    assert_eq!(accounts.len(), 2);
    assert!(accounts.iter().all(|a| a.user_id == 5));
    assert!(accounts[0].created_at >= accounts[1].created_at);
}

#[tokio::test]
async fn test_user_accounts_empty_for_unknown_user() {
    let response = app().oneshot(get("/user/9/block-accounts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Envelope = body_json(response).await;
    assert_eq!(envelope.data.unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn test_user_accounts_malformed_id_is_bad_request() {
    let response = app().oneshot(get("/user/x/block-accounts")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_returns_no_content_then_get_is_not_found() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_json(
            "/block-account",
            r#"{"user_id": 2, "principal": 750, "period": "3m"}"#,
        ))
        .await
        .unwrap();
    let envelope: Envelope = body_json(created).await;
    let account: BlockAccount = serde_json::from_value(envelope.data.unwrap()).unwrap();

    let response = app
        .clone()
        .oneshot(delete(&format!("/block-account/{}", account.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());

    let response = app
        .oneshot(get(&format!("/block-account/{}", account.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let response = app().oneshot(delete("/block-account/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_malformed_id_is_bad_request() {
    let response = app().oneshot(delete("/block-account/nan")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_ok() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_reports_unavailable_when_store_is_down() {
    let repository = InMemoryRepository {
        fail_ping: true,
        ..InMemoryRepository::default()
    };

    let response = app_over(repository).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
