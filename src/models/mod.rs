mod post;

pub use post::{BlogPost, NewPost};
