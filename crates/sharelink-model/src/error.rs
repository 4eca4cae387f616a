use thiserror::Error;

/// Errors raised while turning external input into model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The key does not name any of the built-in networks.
    #[error("Wrong site ({key}). Available: {available}")]
    UnknownNetwork { key: String, available: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
