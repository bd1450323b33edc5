mod json_file;

pub use json_file::JsonFileStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BlogPost, NewPost};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The interface for storing blog posts.
///
/// Not-found is part of the contract, not an error: `get_by_id` and `update`
/// return `None` and `delete` returns `false` for a missing id, so callers
/// never need a separate existence check.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in the order the backing collection holds them.
    async fn get_all(&self) -> Result<Vec<BlogPost>, StoreError>;

    async fn get_by_id(&self, id: u64) -> Result<Option<BlogPost>, StoreError>;

    /// Assigns the next id and the creation timestamp, persists, and returns
    /// the stored post.
    async fn add(&self, new_post: NewPost) -> Result<BlogPost, StoreError>;

    /// Replaces username/text on the post with the given id, keeping its id
    /// and creation date. Returns the updated post, or `None` if absent.
    async fn update(&self, id: u64, new_post: NewPost) -> Result<Option<BlogPost>, StoreError>;

    /// Removes the post with the given id; returns whether one existed.
    async fn delete(&self, id: u64) -> Result<bool, StoreError>;
}
