mod requests;

pub use requests::BlogPostRequest;
