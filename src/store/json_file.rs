use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::{fs, sync::RwLock};

use super::{PostStore, StoreError};
use crate::models::{BlogPost, NewPost};

/// JSON file-backed implementation of [`PostStore`].
///
/// The whole collection lives in one file as a JSON array; every mutation is
/// a full read-modify-write cycle. The `RwLock` holds the write half across
/// that entire cycle, so concurrent creates cannot observe the same max id
/// and concurrent updates cannot lose writes. Reads share the lock and see
/// the last-written snapshot.
pub struct JsonFileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileStore {
    /// Open the store at the given path. Creates the parent directory and an
    /// empty collection file if they do not exist yet.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let store = Self {
            path,
            lock: RwLock::new(()),
        };
        if !fs::try_exists(&store.path).await? {
            store.write_posts(&[]).await?;
        }
        Ok(store)
    }

    /// Read the full collection. A missing file or malformed content yields
    /// an empty collection rather than an error.
    async fn read_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes).unwrap_or_default())
    }

    /// Overwrite the file with the full collection.
    async fn write_posts(&self, posts: &[BlogPost]) -> Result<(), StoreError> {
        let data = serde_json::to_vec(posts)?;
        fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn get_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let _guard = self.lock.read().await;
        self.read_posts().await
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<BlogPost>, StoreError> {
        let _guard = self.lock.read().await;
        let posts = self.read_posts().await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    async fn add(&self, new_post: NewPost) -> Result<BlogPost, StoreError> {
        let _guard = self.lock.write().await;
        let mut posts = self.read_posts().await?;

        let id = posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        let post = BlogPost {
            id,
            username: new_post.username,
            text: new_post.text,
            date_created: Utc::now(),
        };

        posts.push(post.clone());
        self.write_posts(&posts).await?;
        Ok(post)
    }

    async fn update(&self, id: u64, new_post: NewPost) -> Result<Option<BlogPost>, StoreError> {
        let _guard = self.lock.write().await;
        let mut posts = self.read_posts().await?;

        let Some(existing) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        existing.username = new_post.username;
        existing.text = new_post.text;
        let updated = existing.clone();

        self.write_posts(&posts).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let _guard = self.lock.write().await;
        let mut posts = self.read_posts().await?;

        let len_before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == len_before {
            return Ok(false);
        }

        self.write_posts(&posts).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("blogposts_{}.json", Uuid::new_v4()))
    }

    fn new_post(username: &str, text: &str) -> NewPost {
        NewPost {
            username: username.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn bootstrap_is_empty() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;

        assert!(store.get_all().await?.is_empty());
        assert!(store.get_by_id(999).await?.is_none());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;

        let before = Utc::now();
        let first = store.add(new_post("a", "hi")).await?;
        assert_eq!(first.id, 1);
        assert_eq!(first.username, "a");
        assert_eq!(first.text, "hi");
        assert!(first.date_created >= before && first.date_created <= Utc::now());

        let second = store.add(new_post("b", "y")).await?;
        assert_eq!(second.id, 2);

        assert_eq!(store.get_by_id(1).await?.unwrap().username, "a");
        assert_eq!(store.get_by_id(2).await?.unwrap().username, "b");
        assert_eq!(store.get_all().await?.len(), 2);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn id_is_max_plus_one_after_delete() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;

        store.add(new_post("a", "1")).await?;
        store.add(new_post("b", "2")).await?;
        assert!(store.delete(2).await?);

        // max remaining id is 1, so the next id is 2 again
        let next = store.add(new_post("c", "3")).await?;
        assert_eq!(next.id, 2);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id_and_date() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;

        let created = store.add(new_post("a", "hi")).await?;
        let updated = store
            .update(created.id, new_post("a", "z"))
            .await?
            .expect("post exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.text, "z");
        assert_eq!(updated.date_created, created.date_created);

        let fetched = store.get_by_id(created.id).await?.unwrap();
        assert_eq!(fetched.text, "z");
        assert_eq!(fetched.date_created, created.date_created);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_signalled_and_changes_nothing() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;

        store.add(new_post("a", "hi")).await?;
        assert!(store.update(42, new_post("x", "y")).await?.is_none());
        assert_eq!(store.get_all().await?.len(), 1);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;

        store.add(new_post("a", "1")).await?;
        store.add(new_post("b", "2")).await?;

        assert!(store.delete(1).await?);
        assert!(store.get_by_id(1).await?.is_none());

        // second delete is a no-op and leaves the other record alone
        assert!(!store.delete(1).await?);
        let remaining = store.get_all().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn state_survives_reload() -> Result<(), StoreError> {
        let path = temp_path();
        let store = JsonFileStore::new(&path).await?;
        store.add(new_post("a", "hi")).await?;
        store.add(new_post("b", "yo")).await?;
        store.delete(1).await?;

        let reloaded = JsonFileStore::new(&path).await?;
        let posts = reloaded.get_all().await?;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 2);
        assert_eq!(posts[0].username, "b");

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_reads_as_empty() -> Result<(), StoreError> {
        let path = temp_path();
        tokio::fs::write(&path, b"not json at all").await?;

        let store = JsonFileStore::new(&path).await?;
        assert!(store.get_all().await?.is_empty());

        // the store recovers: the next add starts the collection over
        let post = store.add(new_post("a", "hi")).await?;
        assert_eq!(post.id, 1);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_adds_keep_ids_unique() -> Result<(), StoreError> {
        let path = temp_path();
        let store = std::sync::Arc::new(JsonFileStore::new(&path).await?);

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.add(new_post("user", &format!("post {i}"))).await
            }));
        }
        for handle in handles {
            handle.await.expect("task panicked")?;
        }

        let mut ids: Vec<u64> = store.get_all().await?.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
