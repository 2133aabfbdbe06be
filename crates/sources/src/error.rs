use thiserror::Error;

use crate::types::SourceType;

/// Errors raised while assembling source parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceParamsError {
    /// No source type was given to the builder
    #[error("Missing source type")]
    MissingType,

    /// An amount was set without the currency it is denominated in
    #[error("Amount {0} is missing a currency")]
    AmountWithoutCurrency(u64),

    /// Redirect flow requested without a return URL
    #[error("Redirect flow requires a return_url")]
    MissingReturnUrl,

    /// Method-specific details belong to another source type
    #[error("Details for {found} do not match source type {expected}")]
    DetailsTypeMismatch {
        expected: SourceType,
        found: SourceType,
    },

    /// An additional API parameter would replace a modelled field
    #[error("Additional parameter {0:?} conflicts with a modelled field")]
    ConflictingParameter(String),

    /// A caller-supplied key cannot be flattened into a form field name
    #[error("Invalid key in {group}: {key:?}")]
    InvalidKey { group: &'static str, key: String },

    /// Unrecognized flow name
    #[error("Unknown source flow: {0}")]
    UnknownFlow(String),

    /// Unrecognized usage name
    #[error("Unknown source usage: {0}")]
    UnknownUsage(String),

    /// Template could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors raised while encoding a form body
#[derive(Error, Debug)]
pub enum FormEncodeError {
    /// Serialization error from serde_urlencoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_urlencoded::ser::Error),
}

/// Result type alias for source parameter operations
pub type Result<T> = std::result::Result<T, SourceParamsError>;
