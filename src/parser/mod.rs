pub mod explodes;

use thiserror::Error;

/// Errors produced while decoding a share link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid base64 payload: {0}")]
    Decode(String),

    #[error("malformed link: {0}")]
    Format(String),

    #[error("missing required field `{0}`")]
    FieldMissing(&'static str),

    #[error("unrecognized link scheme: {0}")]
    UnrecognizedScheme(String),
}

pub use explodes::common::explode;
