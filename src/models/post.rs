use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored blog post. `id` and `date_created` are assigned by the store,
/// never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    pub username: String,
    pub text: String,
    pub date_created: DateTime<Utc>,
}

/// The caller-supplied half of a post, used for both create and update.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub username: String,
    pub text: String,
}
