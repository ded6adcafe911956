use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// Host handed over text that is not a JSON object.
    #[error("Malformed track input: {0}")]
    MalformedInput(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::MalformedInput(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
