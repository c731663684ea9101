use std::io;

use thiserror::Error;

/// Errors originating from the `filedeck` core.
#[derive(Debug, Error)]
pub enum FileBrowserError {
    #[error("unknown file action `{0}`")]
    UnknownAction(String),

    #[error("file action `{0}` is registered more than once")]
    DuplicateAction(String),

    #[error("file action `{action_id}` failed: {message}")]
    ActionEffect { action_id: String, message: String },

    #[error("file action `{action_id}` exceeded dispatch depth {depth}")]
    DispatchDepthExceeded { action_id: String, depth: usize },

    #[error("config i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FileBrowserError>;
