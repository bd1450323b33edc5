use std::sync::Arc;

use crate::store::PostStore;

/// Shared state handed to every handler. The store is behind a trait object
/// so the backing engine can be swapped without touching the routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}
