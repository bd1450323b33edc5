use serde::Deserialize;
use validator::Validate;

use crate::models::NewPost;

/// Body for both POST and PUT on /api/blogposts.
///
/// Fields are `Option` so that a missing field reaches the `required`
/// validator and comes back as a 400 instead of a deserialization rejection.
#[derive(Debug, Validate, Deserialize)]
pub struct BlogPostRequest {
    #[validate(required(message = "Username is required"), length(min = 1, message = "Username must not be empty"))]
    pub username: Option<String>,
    #[validate(required(message = "Text is required"), length(min = 1, message = "Text must not be empty"))]
    pub text: Option<String>,
}

/// Only meaningful after `validate()` has passed; missing fields collapse to
/// empty strings here but never get that far.
impl From<BlogPostRequest> for NewPost {
    fn from(req: BlogPostRequest) -> Self {
        Self {
            username: req.username.unwrap_or_default(),
            text: req.text.unwrap_or_default(),
        }
    }
}
