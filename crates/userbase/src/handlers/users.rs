//! User endpoint: method-routed CRUD over a single resource.
//!
//! `UserHandler` turns an [`ApiRequest`] into repository calls and an
//! [`ApiResponse`]. It holds no per-request state.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
};
use serde::Serialize;
use serde_json::Value;

use userbase_core::storage::{
    repository_error_to_status_code, PageRequest, RepositoryError, UserRepository,
};
use userbase_core::user::{validate_user, User};

use super::response::{error_response, json_response, method_not_allowed, no_content};
use super::{ApiRequest, ApiResponse};
use crate::state::AppState;

/// Paged list body: `{"users": [...], "lastEvaluatedKey"?: "..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<String>,
}

/// Dispatches user requests to a repository.
#[derive(Clone)]
pub struct UserHandler {
    repo: Arc<dyn UserRepository>,
}

impl UserHandler {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Routes a request by method.
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        tracing::info!(method = %request.method, path = %request.path, "Received request");

        match request.method {
            Method::GET => self.get_user(request).await,
            Method::POST => self.create_user(request).await,
            Method::PUT => self.update_user(request).await,
            Method::DELETE => self.delete_user(request).await,
            _ => method_not_allowed(),
        }
    }

    /// GET: one user by `email`, or a page of users.
    async fn get_user(&self, request: &ApiRequest) -> ApiResponse {
        if let Some(email) = request.query_param("email") {
            return match self.repo.get_user(email).await {
                Ok(Some(user)) => json_response(StatusCode::OK, &user),
                Ok(None) => error_response(StatusCode::NOT_FOUND, "User not found"),
                Err(e) => repository_error_response(&e, "User not found"),
            };
        }

        let page_request = PageRequest::from_query(
            request.query_param("limit"),
            request.query_param("lastEvaluatedKey"),
        );

        match self.repo.list_users(&page_request).await {
            Ok(page) => json_response(
                StatusCode::OK,
                &UserPage {
                    users: page.items,
                    last_evaluated_key: page.next_cursor,
                },
            ),
            Err(e) => repository_error_response(&e, "User not found"),
        }
    }

    /// POST: create a user from the JSON body.
    async fn create_user(&self, request: &ApiRequest) -> ApiResponse {
        let user = match parse_user(&request.body) {
            Ok(user) => user,
            Err(response) => return response,
        };

        if let Err(e) = validate_user(&user) {
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }

        match self.repo.create_user(&user).await {
            Ok(created) => {
                tracing::info!(email = %created.email, "Created user");
                json_response(StatusCode::CREATED, &created)
            }
            // Every create failure, a duplicate email included, is a 400.
            Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        }
    }

    /// PUT: replace an existing user from the JSON body.
    async fn update_user(&self, request: &ApiRequest) -> ApiResponse {
        let user = match parse_user(&request.body) {
            Ok(user) => user,
            Err(response) => return response,
        };

        if user.email.is_empty() {
            return error_response(StatusCode::BAD_REQUEST, "Email is required for user update");
        }

        if let Err(e) = validate_user(&user) {
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }

        match self.repo.update_user(&user).await {
            Ok(updated) => {
                tracing::info!(email = %updated.email, "Updated user");
                json_response(StatusCode::OK, &updated)
            }
            Err(e) => repository_error_response(&e, "User not found for update"),
        }
    }

    /// DELETE: remove the user named by the `email` query parameter.
    async fn delete_user(&self, request: &ApiRequest) -> ApiResponse {
        let Some(email) = request.query_param("email") else {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Email query parameter is required for deletion",
            );
        };

        match self.repo.delete_user(email).await {
            Ok(()) => {
                tracing::info!(email = %email, "Deleted user");
                no_content()
            }
            Err(e) => repository_error_response(&e, "User not found for deletion"),
        }
    }
}

/// Parses a request body into a user. Only a JSON object is a user; a bare
/// `null` is an empty record and goes on to validation.
fn parse_user(body: &str) -> Result<User, ApiResponse> {
    let invalid = |reason: &dyn std::fmt::Display| {
        tracing::debug!(error = %reason, "Rejected request body");
        error_response(StatusCode::BAD_REQUEST, "Invalid request body")
    };

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => Ok(User::default()),
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|e| invalid(&e)),
        Ok(_) => Err(invalid(&"body is not a JSON object")),
        Err(e) => Err(invalid(&e)),
    }
}

/// Maps a repository failure to a response: a missing key gets 404 with
/// `not_found_message`, anything else 400 with the error's detail.
fn repository_error_response(error: &RepositoryError, not_found_message: &str) -> ApiResponse {
    let status = StatusCode::from_u16(repository_error_to_status_code(error))
        .unwrap_or(StatusCode::BAD_REQUEST);

    if status == StatusCode::NOT_FOUND {
        error_response(status, not_found_message)
    } else {
        if error.kind().is_transport() {
            tracing::error!(kind = %error.kind(), error = %error, "Store request failed");
        } else {
            tracing::warn!(kind = %error.kind(), error = %error, "Repository operation failed");
        }
        error_response(status, error.to_string())
    }
}

/// Axum entry point for the user endpoint (any method on `/` or `/users`).
pub async fn users_endpoint(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ApiResponse {
    let Ok(body) = String::from_utf8(body.to_vec()) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    let request = ApiRequest {
        method,
        path: uri.path().to_string(),
        query,
        body,
    };

    state.users.handle(&request).await
}
