use thiserror::Error;

/// Errors raised while loading or resolving the data store
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{kind} {id} references missing {target}")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
