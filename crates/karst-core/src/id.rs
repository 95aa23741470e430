//! Strongly-typed handles: [`Pointer`], [`BlockId`], and [`Slot`].
//!
//! All three wrap a plain `u32`. Keeping them distinct at the type
//! level prevents a decoded block id or in-block slot from being
//! passed where an encoded pointer is expected, and vice versa.

use std::fmt;

/// An encoded handle to one arena entry.
///
/// A pointer packs a [`BlockId`] in its high bits and a [`Slot`] in its
/// low bits; the split is fixed per arena by the block size. The value
/// `0` is reserved as [`Pointer::NULL`] and never refers to a live
/// entry — slot 0 of block 0 is permanently unusable to keep it that
/// way.
///
/// Pointers are plain numbers: they are `Copy`, survive the entry they
/// name being freed, and carry no lifetime. The arena that produced a
/// pointer is the only place it can be dereferenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pointer(pub u32);

impl Pointer {
    /// The null pointer. Means "no entry" everywhere in the API.
    pub const NULL: Pointer = Pointer(0);

    /// Whether this is the null pointer.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "{:#010x}", self.0)
        }
    }
}

impl From<u32> for Pointer {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a block within an arena.
///
/// Block ids are assigned monotonically at block creation and are equal
/// to the block's position in the arena's block list. `BlockId(0)` is
/// the root block, which exists for the arena's whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BlockId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An entry's index within its block.
///
/// Slots are dense, 0-based, and stable: once allocated, an entry keeps
/// its slot until it is freed and the slot is reused, or until the
/// whole block is wiped or dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(pub u32);

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Slot {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
