use thiserror::Error;

/// A record lacked an attribute the keyword extractor cannot do without.
///
/// Only `title` and `rating` are required; optional attributes simply
/// contribute no keywords when absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record `{record}` is missing required field `{field}`")]
pub struct MissingFieldError {
    pub field: &'static str,
    pub record: String,
}
