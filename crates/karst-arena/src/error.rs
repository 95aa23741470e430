//! Runtime error type for arena operations.

use std::error::Error;
use std::fmt;

use karst_core::BlockId;

/// Errors raised by arena operations after construction.
///
/// Every variant signals a programming error in the caller, never a
/// transient condition: nothing is retried or recovered internally,
/// and a failed operation leaves the arena unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A reference-field name that is not in the schema.
    UnknownField {
        /// The unresolved name.
        name: String,
    },
    /// A raw-field name that is not in the schema.
    UnknownRawField {
        /// The unresolved name.
        name: String,
    },
    /// A raw field used where a reference field is required.
    RawAsPointer {
        /// The misused name.
        name: String,
    },
    /// A reference field used where a raw field is required.
    PointerAsRaw {
        /// The misused name.
        name: String,
    },
    /// Read through the null pointer.
    NullRead,
    /// Write through the null pointer.
    NullWrite,
    /// `free` called on the null pointer.
    NullFree,
    /// `erase` called on the null pointer.
    NullErase,
    /// The block-id space of the pointer encoding is exhausted.
    OutOfMemory {
        /// Maximum number of blocks the encoding can address.
        max_blocks: u32,
    },
    /// `drop_block` called on a block that is not the tail of the
    /// block list. Blocks are only removable in reverse creation
    /// order, so ids of surviving blocks stay dense.
    NotTailBlock {
        /// The block that was not droppable.
        block: BlockId,
    },
    /// `drop_block` called on a block that still holds entries.
    BlockOccupied {
        /// The occupied block.
        block: BlockId,
        /// Number of live entries in it.
        entries: u32,
    },
    /// Internal bookkeeping detected an impossible state. Unreachable
    /// in correct code.
    InvariantViolation {
        /// What the bookkeeping check found.
        detail: &'static str,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { name } => {
                write!(f, "unknown reference field '{name}'")
            }
            Self::UnknownRawField { name } => {
                write!(f, "unknown raw field '{name}'")
            }
            Self::RawAsPointer { name } => {
                write!(f, "'{name}' is a raw field, not a reference field")
            }
            Self::PointerAsRaw { name } => {
                write!(f, "'{name}' is a reference field, not a raw field")
            }
            Self::NullRead => write!(f, "read through the null pointer"),
            Self::NullWrite => write!(f, "write through the null pointer"),
            Self::NullFree => write!(f, "free of the null pointer"),
            Self::NullErase => write!(f, "erase of the null pointer"),
            Self::OutOfMemory { max_blocks } => {
                write!(f, "arena exhausted: pointer encoding addresses at most {max_blocks} blocks")
            }
            Self::NotTailBlock { block } => {
                write!(f, "block {block} is not the last block and cannot be dropped")
            }
            Self::BlockOccupied { block, entries } => {
                write!(f, "block {block} still holds {entries} entries and cannot be dropped")
            }
            Self::InvariantViolation { detail } => {
                write!(f, "arena invariant violated: {detail}")
            }
        }
    }
}

impl Error for ArenaError {}
