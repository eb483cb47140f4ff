use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Integer fields of a handler that accept the number-or-string encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Key,
    SlotKey,
}

impl NumericField {
    /// Field name as spelled on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::Key => "key",
            NumericField::SlotKey => "slotKey",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed script export: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    #[error("slot key {key:?} is not a base-10 integer")]
    InvalidSlotKey {
        key: String,
        #[source]
        source: ParseIntError,
    },

    #[error("handler {handler}: `{field}` value {raw} is not a base-10 integer")]
    InvalidNumericField {
        field: NumericField,
        handler: usize,
        raw: String,
    },

    #[error("could not serialize script export: {0}")]
    SerializationFailure(#[source] serde_json::Error),
}
