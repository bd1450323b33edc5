// ============================================================================
// BLOG POST REST API BACKED BY A JSON FILE
// ============================================================================

// - CRUD on blog posts over /api/blogposts
// - Single JSON file as the persistence layer
// - Input validation
// - Problem-details error responses
// - CORS configuration
// - Structured logging

mod config;
mod dto;
mod errors;
mod models;
mod routes;
mod states;
mod store;

use std::sync::Arc;

use tracing::info;

use crate::{config::Config, states::AppState, store::JsonFileStore};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // The store owns the backing file; nothing else touches it
    let store = JsonFileStore::new(&config.data_path)
        .await
        .expect("Failed to initialize the post store");

    let state = AppState {
        store: Arc::new(store),
    };

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listen address");

    info!("Server running on http://{}", config.bind_addr);
    info!("Posts stored in {}", config.data_path.display());
    info!("API Endpoints:");
    info!("  GET    /health              - Health check");
    info!("  GET    /api/blogposts       - List posts");
    info!("  POST   /api/blogposts       - Create post");
    info!("  GET    /api/blogposts/:id   - Get specific post");
    info!("  PUT    /api/blogposts/:id   - Update post");
    info!("  DELETE /api/blogposts/:id   - Delete post");

    axum::serve(listener, app).await.unwrap();
}
