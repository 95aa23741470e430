//! Per-block LIFO stack of freed slots awaiting reuse.

use karst_core::Slot;

/// Stack of freed slot indices within one block.
///
/// Backed by the narrowest integer width that can hold
/// `block_size - 1`: bytes for block sizes up to 256, half-words
/// otherwise. Capacity is reserved up front, so pushes never
/// reallocate. A block can free at most `block_size` distinct slots,
/// which keeps the stack within that capacity without bounds checks.
#[derive(Debug)]
pub enum FreeList {
    /// Byte-wide entries, for block sizes up to 256.
    Narrow(Vec<u8>),
    /// Half-word entries, for block sizes up to 65536.
    Wide(Vec<u16>),
}

impl FreeList {
    /// Create an empty free list sized for the given block size.
    pub fn new(block_size: u32) -> Self {
        if block_size <= 256 {
            Self::Narrow(Vec::with_capacity(block_size as usize))
        } else {
            Self::Wide(Vec::with_capacity(block_size as usize))
        }
    }

    /// Push a freed slot. The caller guarantees the slot fits the
    /// width chosen at construction.
    pub fn push(&mut self, slot: Slot) {
        match self {
            Self::Narrow(stack) => stack.push(slot.0 as u8),
            Self::Wide(stack) => stack.push(slot.0 as u16),
        }
    }

    /// Pop the most recently freed slot, if any.
    pub fn pop(&mut self) -> Option<Slot> {
        match self {
            Self::Narrow(stack) => stack.pop().map(|s| Slot(u32::from(s))),
            Self::Wide(stack) => stack.pop().map(|s| Slot(u32::from(s))),
        }
    }

    /// Number of slots waiting for reuse.
    pub fn len(&self) -> u32 {
        match self {
            Self::Narrow(stack) => stack.len() as u32,
            Self::Wide(stack) => stack.len() as u32,
        }
    }

    /// Whether no slots are waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard all pending slots.
    pub fn clear(&mut self) {
        match self {
            Self::Narrow(stack) => stack.clear(),
            Self::Wide(stack) => stack.clear(),
        }
    }
}
