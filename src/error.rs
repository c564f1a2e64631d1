//! The one failure class the catalogue knows: a key that names no
//! variant of a closed set.

use thiserror::Error;

/// A factory or selector was asked for a variant outside its closed set.
///
/// Fatal to the requesting runner; never caught or defaulted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} {key:?}")]
pub struct UnknownVariant {
    /// What kind of variant was being selected, e.g. `"employee type"`.
    pub kind: &'static str,
    /// The unrecognized key as given by the caller.
    pub key: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, key: impl Into<String>) -> Self {
        UnknownVariant {
            kind,
            key: key.into(),
        }
    }
}
