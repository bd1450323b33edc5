use std::path::PathBuf;

/// Runtime configuration, read from the environment after `dotenvy` has
/// loaded any `.env` file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: String,
    /// Path of the JSON file the post store persists to.
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let data_path = std::env::var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/blogposts.json"));

        Self {
            bind_addr,
            data_path,
        }
    }
}
