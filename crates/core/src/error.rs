/// Result alias that carries the custom [`SiteError`] type.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Common error type for the core crate.
///
/// State machine misuse is deliberately absent: controllers report ignored
/// transitions through [`crate::Transition`] instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON in a configuration file or replay script.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Lookup of a static content record by id failed.
    #[error("no {kind} with id {id}")]
    UnknownContent { kind: &'static str, id: u32 },
    /// A submitted form field did not satisfy its layout.
    #[error("field `{field}` {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    #[error("carousel needs at least {needed} items, got {available}")]
    NotEnoughItems { needed: usize, available: usize },
}

impl SiteError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for SiteError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for SiteError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
