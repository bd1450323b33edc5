use crate::{dto::BlogPostRequest, errors::ApiError, models::BlogPost, states::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::info;
use validator::Validate;

/// GET /api/blogposts
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.store.get_all().await?;
    Ok(Json(posts))
}

/// GET /api/blogposts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<BlogPost>, ApiError> {
    let post = state.store.get_by_id(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(post))
}

/// POST /api/blogposts
/// Body: { "username": "...", "text": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<BlogPostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = state.store.add(payload.into()).await?;

    info!("Post created: {} by {}", post.id, post.username);

    let location = format!("/api/blogposts/{}", post.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(post),
    ))
}

/// PUT /api/blogposts/:id
/// Body: { "username": "...", "text": "..." }
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<BlogPostRequest>,
) -> Result<StatusCode, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    state
        .store
        .update(id, payload.into())
        .await?
        .ok_or(ApiError::NotFound)?;

    info!("Post updated: {}", id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/blogposts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }

    info!("Post deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
