use crate::model::FieldId;
use thiserror::Error;

/// Errors surfaced by feedmap operations.
///
/// A missing partner record or an ambiguous path is a normal state of real
/// feeds, handled by the pairing rules rather than reported here.
#[derive(Error, Debug)]
pub enum FeedmapError {
    #[error("Unknown field: {0}")]
    UnknownField(FieldId),

    #[error("Field {0} is unpaired; its name is derived from the path and cannot be edited")]
    UnsupportedRename(FieldId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedmapError>;
