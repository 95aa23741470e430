//! Fixed-capacity storage blocks.
//!
//! A [`Block`] holds up to `block_size` entries: one payload slot and
//! one `u32` per declared field, laid out as parallel slabs indexed by
//! [`Slot`]. Blocks answer in-block allocation and field access; the
//! arena decides which block a pointer refers to.

use std::sync::Arc;

use karst_core::{FieldCode, FieldKind, Schema, Slot};

use crate::free_list::FreeList;

/// One fixed-capacity unit of arena storage.
///
/// Slots are handed out low-to-high by a bump cursor (`next_free`) and
/// recycled LIFO through the free list. The root block (block 0)
/// reserves slot 0 so that the encoded pointer `0` never names a live
/// entry; its usable capacity is `block_size - 1`.
#[derive(Debug)]
pub struct Block<T> {
    schema: Arc<Schema>,
    /// Payloads; `None` marks a free slot.
    values: Vec<Option<T>>,
    /// One slab per reference field. Entries are encoded pointers.
    fields: Vec<Vec<u32>>,
    /// One slab per raw field. Entries are opaque.
    raw_fields: Vec<Vec<u32>>,
    free_list: FreeList,
    /// Lowest slot never yet allocated.
    next_free: u32,
    /// First usable slot: 1 for the root block, 0 otherwise.
    first_slot: u32,
}

impl<T> Block<T> {
    /// Create an empty block.
    pub fn new(schema: Arc<Schema>, block_size: u32, is_root: bool) -> Self {
        let first_slot = u32::from(is_root);
        let size = block_size as usize;
        Self {
            values: (0..size).map(|_| None).collect(),
            fields: vec![vec![0; size]; schema.field_count()],
            raw_fields: vec![vec![0; size]; schema.raw_count()],
            free_list: FreeList::new(block_size),
            next_free: first_slot,
            first_slot,
            schema,
        }
    }

    /// Entries this block can hold.
    pub fn block_size(&self) -> u32 {
        self.values.len() as u32
    }

    /// Usable capacity: `block_size` minus the reserved slot, if any.
    pub fn capacity(&self) -> u32 {
        self.block_size() - self.first_slot
    }

    /// Number of live entries.
    pub fn entry_count(&self) -> u32 {
        self.next_free - self.first_slot - self.free_list.len()
    }

    /// Remaining capacity.
    pub fn available(&self) -> u32 {
        self.capacity() - self.entry_count()
    }

    /// Whether the block holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Whether the block cannot take another entry.
    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    /// Whether the slot currently holds a live entry.
    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.values
            .get(slot.0 as usize)
            .is_some_and(|value| value.is_some())
    }

    /// Allocate a slot, store `value`, and apply field overrides.
    ///
    /// Reuses the most recently freed slot if one is pending,
    /// otherwise takes the bump cursor. Every field slab entry is
    /// zeroed before the overrides (already name-resolved by the
    /// arena) are written. Returns `None` if the block is full.
    pub fn alloc(&mut self, value: T, overrides: &[(FieldCode, u32)]) -> Option<Slot> {
        let slot = match self.free_list.pop() {
            Some(slot) => slot,
            None => {
                if self.next_free >= self.block_size() {
                    return None;
                }
                let slot = Slot(self.next_free);
                self.next_free += 1;
                slot
            }
        };
        let at = slot.0 as usize;
        for slab in &mut self.fields {
            slab[at] = 0;
        }
        for slab in &mut self.raw_fields {
            slab[at] = 0;
        }
        self.values[at] = Some(value);
        for &(code, word) in overrides {
            *self.word_mut(code, slot) = word;
        }
        Some(slot)
    }

    /// Release a slot for reuse. No-op if the slot is already free.
    ///
    /// Field slabs are NOT cleared: pointers stored in other entries'
    /// fields keep reading the stale values until the slot is reused
    /// or [`erase`](Self::erase)d. Three paths keep the free list
    /// from growing without bound:
    ///
    /// 1. freeing the last live entry resets the whole block,
    /// 2. freeing the newest slot just walks the bump cursor back,
    /// 3. anything else goes on the free list.
    pub fn free(&mut self, slot: Slot) {
        if !self.is_occupied(slot) {
            return;
        }
        if self.free_list.len() + 1 == self.next_free - self.first_slot {
            // Every other slot below the cursor is already free. Slots at or
            // above the cursor were never handed out, so the reset only has
            // to touch the allocated prefix.
            for value in &mut self.values[..self.next_free as usize] {
                *value = None;
            }
            self.next_free = self.first_slot;
            self.free_list.clear();
        } else if slot.0 + 1 == self.next_free {
            self.next_free -= 1;
            self.values[slot.0 as usize] = None;
        } else {
            self.free_list.push(slot);
            self.values[slot.0 as usize] = None;
        }
    }

    /// [`free`](Self::free) the slot and zero its field slab entries.
    pub fn erase(&mut self, slot: Slot) {
        self.free(slot);
        let at = slot.0 as usize;
        for slab in &mut self.fields {
            slab[at] = 0;
        }
        for slab in &mut self.raw_fields {
            slab[at] = 0;
        }
    }

    /// Reset the block to its freshly-constructed state: all slabs
    /// zeroed, all values cleared, cursor and free list reset.
    pub fn wipe(&mut self) {
        for slab in &mut self.fields {
            slab.fill(0);
        }
        for slab in &mut self.raw_fields {
            slab.fill(0);
        }
        for value in &mut self.values[..self.next_free as usize] {
            *value = None;
        }
        self.free_list.clear();
        self.next_free = self.first_slot;
    }

    /// The payload at a slot, if the slot is occupied.
    pub fn value(&self, slot: Slot) -> Option<&T> {
        self.values[slot.0 as usize].as_ref()
    }

    /// Store a payload at a slot.
    ///
    /// Writing to a freed slot is not detected; it makes the slot
    /// read as occupied without taking it off the free list. Callers
    /// must only write through live pointers.
    pub fn set_value(&mut self, slot: Slot, value: T) {
        self.values[slot.0 as usize] = Some(value);
    }

    /// Read a field slab entry.
    pub fn word(&self, code: FieldCode, slot: Slot) -> u32 {
        self.slab(code)[slot.0 as usize]
    }

    /// Mutable access to a field slab entry.
    pub fn word_mut(&mut self, code: FieldCode, slot: Slot) -> &mut u32 {
        let at = slot.0 as usize;
        match code.kind() {
            FieldKind::Reference => &mut self.fields[code.index()][at],
            FieldKind::Raw => &mut self.raw_fields[code.index()][at],
        }
    }

    /// The schema shared by every block of this arena.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    fn slab(&self, code: FieldCode) -> &[u32] {
        match code.kind() {
            FieldKind::Reference => &self.fields[code.index()],
            FieldKind::Raw => &self.raw_fields[code.index()],
        }
    }
}
