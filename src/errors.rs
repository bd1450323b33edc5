use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    ValidationError(String),
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Structured error body returned to clients: a human-readable title, the
/// numeric status, a detail message and the originating request path.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
/// This is how we control what users see when errors occur
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let problem = match self {
            ApiError::NotFound => Problem {
                title: "Blog post not found".into(),
                status: StatusCode::NOT_FOUND.as_u16(),
                detail: "No blog post exists with the requested id".into(),
                instance: None,
            },
            ApiError::ValidationError(msg) => Problem {
                title: "Validation failed".into(),
                status: StatusCode::BAD_REQUEST.as_u16(),
                detail: msg,
                instance: None,
            },
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                Problem {
                    title: "An error occurred".into(),
                    status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    detail: "Internal server error".into(),
                    instance: None,
                }
            }
        };

        // Stash the problem in the response extensions so `attach_instance`
        // can fill in the request path.
        let mut response = problem.clone().into_response();
        response.extensions_mut().insert(problem);
        response
    }
}

/// Router-level middleware that rewrites error responses so their `instance`
/// field carries the path of the request that failed.
pub async fn attach_instance(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut response = next.run(req).await;

    if let Some(problem) = response.extensions_mut().remove::<Problem>() {
        return Problem {
            instance: Some(path),
            ..problem
        }
        .into_response();
    }

    response
}
