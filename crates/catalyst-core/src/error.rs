use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalystError {
    #[error("{0}")]
    Invalid(String),

    #[error("{0} not found.")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CatalystResult<T> = Result<T, CatalystError>;

/// Collapse a tool outcome into the text handed back to the caller.
/// Failures always start with `Error:`.
pub trait IntoReply {
    fn into_reply(self) -> String;
}

impl IntoReply for CatalystResult<String> {
    fn into_reply(self) -> String {
        self.unwrap_or_else(|e| format!("Error: {e}"))
    }
}
