pub mod health;
pub mod post;

use axum::{
    Router, middleware,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{errors, states::AppState};

/// Build the full application router, middleware included.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/blogposts",
            get(post::get_posts).post(post::create_post),
        )
        .route(
            "/api/blogposts/{id}",
            get(post::get_post)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        .layer(middleware::from_fn(errors::attach_instance))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
