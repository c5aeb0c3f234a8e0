use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required tool argument was absent or had the wrong type.
    #[error("{0}")]
    MissingArgument(String),
    /// The top-level directory read failed. Per-entry failures never end up here.
    #[error("failed to read directory: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid URI format: {0}")]
    InvalidUri(String),
    #[error("failed to marshal JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("other error: {0}")]
    Other(String),
}

impl Error {
    pub fn directory_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::DirectoryRead {
            path: path.into(),
            source,
        }
    }
}
