//! HTTP transport for the user store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /user/create` - create a user from a JSON body.
//! - `POST /user/update` - replace a user; the body must carry the current password.
//! - `GET /user/getUsers?criteria=..&value=..` - users matching one attribute.
//! - `GET /user/getAll` - every user.
//! - `GET /user/:email` - one user.
//! - `DELETE /user/:email` - remove a user, answers `true`.
//!
//! Requests are validated here before they reach the store. Failures answer
//! `{ "error": message }` with 400, 401, 404, 409 or 500; bodies and query
//! strings that do not deserialize are a 400 like any other bad input.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::emitter::EventSink;
use crate::error::{ErrorKind, StoreError};
use crate::store::UserStore;
use crate::user::UserRecord;
use crate::validation::{self, ValidationError};

#[derive(Debug, Error)]
enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(err) => match err.kind() {
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    criteria: String,
    #[serde(default)]
    value: String,
}

/// Build an axum `Router` serving the given store.
pub fn router<S: EventSink + 'static>(store: Arc<UserStore<S>>) -> Router {
    Router::new()
        .route("/user/create", post(create_handler::<S>))
        .route("/user/update", post(update_handler::<S>))
        .route("/user/getUsers", get(search_handler::<S>))
        .route("/user/getAll", get(all_handler::<S>))
        .route(
            "/user/:email",
            get(get_handler::<S>).delete(delete_handler::<S>),
        )
        .with_state(store)
}

/// Serve the store over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<S: EventSink + 'static>(
    store: Arc<UserStore<S>>,
    addr: impl tokio::net::ToSocketAddrs,
) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "user registry listening");
    axum::serve(listener, app).await
}

async fn create_handler<S: EventSink + 'static>(
    State(store): State<Arc<UserStore<S>>>,
    body: Result<Json<UserRecord>, JsonRejection>,
) -> Result<Json<UserRecord>, ApiError> {
    let Json(user) = body?;
    validation::validate_user(&user)?;
    let created = store.create(user)?;
    info!(email = created.email(), "user created");
    Ok(Json(created))
}

async fn update_handler<S: EventSink + 'static>(
    State(store): State<Arc<UserStore<S>>>,
    body: Result<Json<UserRecord>, JsonRejection>,
) -> Result<Json<UserRecord>, ApiError> {
    let Json(user) = body?;
    validation::validate_user(&user)?;
    let updated = store.update(user)?;
    info!(email = updated.email(), "user updated");
    Ok(Json(updated))
}

async fn search_handler<S: EventSink + 'static>(
    State(store): State<Arc<UserStore<S>>>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    let Query(params) = query?;
    let filter = validation::parse_filter(&params.criteria, &params.value)?;
    let users = store.list(Some(&filter))?;
    info!(criteria = %filter.criteria(), found = users.len(), "search done");
    Ok(Json(users))
}

async fn all_handler<S: EventSink + 'static>(
    State(store): State<Arc<UserStore<S>>>,
) -> Result<Json<Vec<UserRecord>>, ApiError> {
    Ok(Json(store.list(None)?))
}

async fn get_handler<S: EventSink + 'static>(
    State(store): State<Arc<UserStore<S>>>,
    Path(email): Path<String>,
) -> Result<Json<UserRecord>, ApiError> {
    validation::validate_email(&email)?;
    Ok(Json(store.get(&email)?))
}

async fn delete_handler<S: EventSink + 'static>(
    State(store): State<Arc<UserStore<S>>>,
    Path(email): Path<String>,
) -> Result<Json<bool>, ApiError> {
    validation::validate_email(&email)?;
    let removed = store.delete(&email)?;
    info!(email = %email, "user deleted");
    Ok(Json(removed))
}
