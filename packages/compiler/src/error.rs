//! Errors
//!
//! Scoping itself never fails; only resolving the configuration can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShadowCssError {
    /// Neither a scope identifier nor a component name was supplied
    #[error("component scope must be provided")]
    MissingScope,

    /// The options document could not be decoded
    #[error("invalid scope options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShadowCssError>;
