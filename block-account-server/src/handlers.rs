//! HTTP handlers and response envelopes.

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use block_account_api::domain::CreateBlockAccountRequest;
use block_account_api::error::ApiError;

use crate::state::AppState;

// ============ Response Types ============

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        })
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: status.canonical_reason().unwrap_or("Unknown").to_string(),
        code: status.as_u16(),
        message: Some(message.into()),
    };
    (status, Json(body)).into_response()
}

fn error_response(err: ApiError) -> Response {
    let status = match &err {
        ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::InternalError(_) | ApiError::DatabaseError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let message = match err {
        ApiError::ValidationError(m)
        | ApiError::NotFound(m)
        | ApiError::InternalError(m)
        | ApiError::DatabaseError(m) => m,
    };
    error_body(status, message)
}

// ============ Handlers ============

/// POST /block-account
pub async fn create_block_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlockAccountRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    match state.service.create_block_account(request).await {
        Ok(account) => {
            ApiResponse::success(account, "Block account created successfully").into_response()
        }
        Err(err) => error_response(err),
    }
}

/// GET /block-account/:id
pub async fn get_block_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<i32>() else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid block account ID");
    };

    match state.service.get_block_account(id).await {
        Ok(Some(account)) => {
            ApiResponse::success(account, "Block account retrieved successfully").into_response()
        }
        Ok(None) => error_body(StatusCode::NOT_FOUND, "Block account not found"),
        Err(err) => error_response(err),
    }
}

/// GET /user/:user_id/block-accounts
pub async fn get_user_block_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(user_id) = user_id.parse::<i32>() else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid user ID");
    };

    match state.service.get_user_block_accounts(user_id).await {
        Ok(accounts) => {
            ApiResponse::success(accounts, "User block accounts retrieved successfully")
                .into_response()
        }
        Err(err) => error_response(err),
    }
}

/// DELETE /block-account/:id
pub async fn delete_block_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<i32>() else {
        return error_body(StatusCode::BAD_REQUEST, "Invalid block account ID");
    };

    match state.service.delete_block_account(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Response {
    match state.service.health_check().await {
        Ok(()) => Json(serde_json::json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339(),
        }))
        .into_response(),
        Err(_) => error_body(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable"),
    }
}
