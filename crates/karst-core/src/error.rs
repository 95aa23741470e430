//! Construction-time error type.

use std::error::Error;
use std::fmt;

/// Errors raised while building an arena's configuration.
///
/// These are programming errors in the caller's setup code, reported
/// once at construction; a successfully constructed arena never
/// produces them again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// Block size outside the supported `1..=65536` range.
    InvalidBlockSize {
        /// The rejected block size.
        block_size: u32,
    },
    /// A field name declared more than once, within a kind or across
    /// the reference/raw kinds.
    NameClash {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBlockSize { block_size } => {
                write!(f, "block size {block_size} outside supported range 1..=65536")
            }
            Self::NameClash { name } => {
                write!(f, "field name '{name}' declared more than once")
            }
        }
    }
}

impl Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SchemaError::InvalidBlockSize { block_size: 70_000 };
        assert_eq!(
            e.to_string(),
            "block size 70000 outside supported range 1..=65536"
        );
        let e = SchemaError::NameClash { name: "next".into() };
        assert_eq!(e.to_string(), "field name 'next' declared more than once");
    }
}
