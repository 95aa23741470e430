//! The arena: block owner, allocator, and pointer dispatcher.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use karst_core::{BlockId, FieldCode, FieldKind, Pointer, Schema, SchemaError};

use crate::block::Block;
use crate::codec::PointerCodec;
use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// Stack buffer for resolved field overrides; spills past 8 fields.
type Overrides = SmallVec<[(FieldCode, u32); 8]>;

/// A block-structured pointer arena.
///
/// Owns a growable list of fixed-capacity [`Block`]s and hands out
/// [`Pointer`]s — `u32` handles packing `(block id, slot)`. Entries
/// are allocated with [`alloc`](Self::alloc), addressed through their
/// pointer for payload and field access, and live until explicitly
/// [`free`](Self::free)d. Slots are reused LIFO per block; entries
/// never move, so a pointer stays valid for as long as its entry
/// lives and its block exists.
///
/// The field schema is fixed at construction: a set of reference
/// fields (pointer-valued, for wiring lists and trees) and a disjoint
/// set of raw fields (arbitrary `u32`s). See [`ArenaConfig`].
///
/// # Panics
///
/// Methods taking a [`Pointer`] trust it: a pointer that was not
/// returned by this arena's `alloc`, or whose block has since been
/// dropped, panics on the out-of-range block or slot index. Pointers
/// to freed-but-not-dropped entries do not panic; they read stale
/// data, which is this library's documented trade-off.
#[derive(Debug)]
pub struct Arena<T> {
    schema: Arc<Schema>,
    codec: PointerCodec,
    blocks: Vec<Block<T>>,
    /// Blocks with at least one free slot. Allocation drains this
    /// before growing; which member gets picked is not contractual.
    open: IndexSet<BlockId>,
    block_size: u32,
}

impl<T> Arena<T> {
    /// Build an arena from a validated configuration.
    ///
    /// The root block (block 0) is created immediately; further
    /// blocks appear on demand. Fails on a block size outside
    /// `1..=65536` or on duplicate/overlapping field names.
    pub fn new(config: ArenaConfig) -> Result<Self, SchemaError> {
        if config.block_size == 0 || config.block_size > ArenaConfig::MAX_BLOCK_SIZE {
            return Err(SchemaError::InvalidBlockSize {
                block_size: config.block_size,
            });
        }
        let schema = Arc::new(Schema::new(&config.fields, &config.raw_fields)?);
        let root = Block::new(Arc::clone(&schema), config.block_size, true);
        let mut open = IndexSet::new();
        if root.capacity() > 0 {
            open.insert(BlockId(0));
        }
        Ok(Self {
            codec: PointerCodec::new(config.block_size),
            blocks: vec![root],
            open,
            block_size: config.block_size,
            schema,
        })
    }

    /// Allocate an entry holding `value`, all fields zeroed.
    pub fn alloc(&mut self, value: T) -> Result<Pointer, ArenaError> {
        self.alloc_with(value, &[], &[])
    }

    /// Allocate an entry with initial field values.
    ///
    /// Unlisted fields start at zero. Names are validated against the
    /// schema before any storage is touched: an unknown name or a
    /// name of the wrong kind fails the whole call.
    pub fn alloc_with(
        &mut self,
        value: T,
        refs: &[(&str, Pointer)],
        raws: &[(&str, u32)],
    ) -> Result<Pointer, ArenaError> {
        let mut overrides = Overrides::new();
        for &(name, target) in refs {
            overrides.push((self.ref_code(name)?, target.0));
        }
        for &(name, word) in raws {
            overrides.push((self.raw_code(name)?, word));
        }

        let id = self.pick_block()?;
        let block = &mut self.blocks[id.0 as usize];
        let slot = block
            .alloc(value, &overrides)
            .ok_or(ArenaError::InvariantViolation {
                detail: "open set contained a full block",
            })?;
        if block.is_full() {
            self.open.swap_remove(&id);
        }
        Ok(self.codec.encode(id, slot))
    }

    /// Release the entry behind a pointer.
    ///
    /// Double frees are no-ops. The entry's field slabs are NOT
    /// cleared: other entries still referencing it keep reading the
    /// old words until the slot is reused. Use [`erase`](Self::erase)
    /// to scrub.
    pub fn free(&mut self, pointer: Pointer) -> Result<(), ArenaError> {
        if pointer.is_null() {
            return Err(ArenaError::NullFree);
        }
        let (id, slot) = self.codec.decode(pointer);
        let block = &mut self.blocks[id.0 as usize];
        block.free(slot);
        if block.capacity() > 0 {
            self.open.insert(id);
        }
        Ok(())
    }

    /// [`free`](Self::free) the entry and zero its field slab words.
    pub fn erase(&mut self, pointer: Pointer) -> Result<(), ArenaError> {
        if pointer.is_null() {
            return Err(ArenaError::NullErase);
        }
        let (id, slot) = self.codec.decode(pointer);
        let block = &mut self.blocks[id.0 as usize];
        block.erase(slot);
        if block.capacity() > 0 {
            self.open.insert(id);
        }
        Ok(())
    }

    /// Read a reference field.
    ///
    /// No occupancy check is made: reading a field of a freed entry
    /// returns whatever was last written there.
    pub fn link(&self, pointer: Pointer, name: &str) -> Result<Pointer, ArenaError> {
        let code = self.ref_code(name)?;
        if pointer.is_null() {
            return Err(ArenaError::NullRead);
        }
        let (id, slot) = self.codec.decode(pointer);
        Ok(Pointer(self.blocks[id.0 as usize].word(code, slot)))
    }

    /// Write a reference field; returns `target` for chaining.
    pub fn set_link(
        &mut self,
        pointer: Pointer,
        name: &str,
        target: Pointer,
    ) -> Result<Pointer, ArenaError> {
        let code = self.ref_code(name)?;
        if pointer.is_null() {
            return Err(ArenaError::NullWrite);
        }
        let (id, slot) = self.codec.decode(pointer);
        *self.blocks[id.0 as usize].word_mut(code, slot) = target.0;
        Ok(target)
    }

    /// Read a raw field.
    pub fn raw(&self, pointer: Pointer, name: &str) -> Result<u32, ArenaError> {
        let code = self.raw_code(name)?;
        if pointer.is_null() {
            return Err(ArenaError::NullRead);
        }
        let (id, slot) = self.codec.decode(pointer);
        Ok(self.blocks[id.0 as usize].word(code, slot))
    }

    /// Write a raw field; returns `value` for chaining.
    pub fn set_raw(&mut self, pointer: Pointer, name: &str, value: u32) -> Result<u32, ArenaError> {
        let code = self.raw_code(name)?;
        if pointer.is_null() {
            return Err(ArenaError::NullWrite);
        }
        let (id, slot) = self.codec.decode(pointer);
        *self.blocks[id.0 as usize].word_mut(code, slot) = value;
        Ok(value)
    }

    /// Snapshot every reference field of an entry, in declaration
    /// order. All-null if the entry's slot is unoccupied.
    pub fn links(&self, pointer: Pointer) -> Result<IndexMap<String, Pointer>, ArenaError> {
        if pointer.is_null() {
            return Err(ArenaError::NullRead);
        }
        let (id, slot) = self.codec.decode(pointer);
        let block = &self.blocks[id.0 as usize];
        let occupied = block.is_occupied(slot);
        Ok(self
            .schema
            .names(FieldKind::Reference)
            .map(|(name, code)| {
                let word = if occupied { block.word(code, slot) } else { 0 };
                (name.to_owned(), Pointer(word))
            })
            .collect())
    }

    /// Snapshot every raw field of an entry, in declaration order.
    /// All-zero if the entry's slot is unoccupied.
    pub fn raws(&self, pointer: Pointer) -> Result<IndexMap<String, u32>, ArenaError> {
        if pointer.is_null() {
            return Err(ArenaError::NullRead);
        }
        let (id, slot) = self.codec.decode(pointer);
        let block = &self.blocks[id.0 as usize];
        let occupied = block.is_occupied(slot);
        Ok(self
            .schema
            .names(FieldKind::Raw)
            .map(|(name, code)| {
                let word = if occupied { block.word(code, slot) } else { 0 };
                (name.to_owned(), word)
            })
            .collect())
    }

    /// Write several reference fields at once.
    ///
    /// Every name is validated before the first write, so a bad entry
    /// fails the whole call without partial effects.
    pub fn set_links(
        &mut self,
        pointer: Pointer,
        entries: &[(&str, Pointer)],
    ) -> Result<(), ArenaError> {
        let mut resolved = Overrides::new();
        for &(name, target) in entries {
            resolved.push((self.ref_code(name)?, target.0));
        }
        if pointer.is_null() {
            return Err(ArenaError::NullWrite);
        }
        let (id, slot) = self.codec.decode(pointer);
        let block = &mut self.blocks[id.0 as usize];
        for &(code, word) in &resolved {
            *block.word_mut(code, slot) = word;
        }
        Ok(())
    }

    /// Write several raw fields at once; same contract as
    /// [`set_links`](Self::set_links).
    pub fn set_raws(&mut self, pointer: Pointer, entries: &[(&str, u32)]) -> Result<(), ArenaError> {
        let mut resolved = Overrides::new();
        for &(name, word) in entries {
            resolved.push((self.raw_code(name)?, word));
        }
        if pointer.is_null() {
            return Err(ArenaError::NullWrite);
        }
        let (id, slot) = self.codec.decode(pointer);
        let block = &mut self.blocks[id.0 as usize];
        for &(code, word) in &resolved {
            *block.word_mut(code, slot) = word;
        }
        Ok(())
    }

    /// The payload of an entry.
    ///
    /// `None` for the null pointer and for freed slots; this is the
    /// one read that does not error on null.
    pub fn value(&self, pointer: Pointer) -> Option<&T> {
        if pointer.is_null() {
            return None;
        }
        let (id, slot) = self.codec.decode(pointer);
        self.blocks[id.0 as usize].value(slot)
    }

    /// Replace the payload of an entry.
    ///
    /// Writing through a pointer to a freed slot is not detected and
    /// re-marks the slot live without fixing the free list; only
    /// write through live pointers.
    pub fn set_value(&mut self, pointer: Pointer, value: T) -> Result<(), ArenaError> {
        if pointer.is_null() {
            return Err(ArenaError::NullWrite);
        }
        let (id, slot) = self.codec.decode(pointer);
        self.blocks[id.0 as usize].set_value(slot, value);
        Ok(())
    }

    /// Mutable word view of a raw field.
    ///
    /// This is the same storage [`raw`](Self::raw) and
    /// [`set_raw`](Self::set_raw) touch, so writes through the view
    /// and through the accessors observe each other.
    pub fn raw32(&mut self, pointer: Pointer, name: &str) -> Result<&mut u32, ArenaError> {
        let code = self.raw_code(name)?;
        if pointer.is_null() {
            return Err(ArenaError::NullWrite);
        }
        let (id, slot) = self.codec.decode(pointer);
        Ok(self.blocks[id.0 as usize].word_mut(code, slot))
    }

    /// The raw-field word as two native-endian half-words.
    pub fn raw16(&mut self, pointer: Pointer, name: &str) -> Result<&mut [u16; 2], ArenaError> {
        Ok(bytemuck::cast_mut(self.raw32(pointer, name)?))
    }

    /// The raw-field word as four native-endian bytes.
    pub fn raw8(&mut self, pointer: Pointer, name: &str) -> Result<&mut [u8; 4], ArenaError> {
        Ok(bytemuck::cast_mut(self.raw32(pointer, name)?))
    }

    /// Total live entries across all blocks.
    pub fn len(&self) -> u32 {
        self.blocks.iter().map(Block::entry_count).sum()
    }

    /// Whether the arena holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Free slots remaining across all existing blocks. Growth is not
    /// counted: a full arena can still allocate by adding a block.
    pub fn total_available(&self) -> u32 {
        self.blocks.iter().map(Block::available).sum()
    }

    /// Live entries in one block.
    pub fn entry_count(&self, block: BlockId) -> u32 {
        self.blocks[block.0 as usize].entry_count()
    }

    /// Free slots in one block.
    pub fn available(&self, block: BlockId) -> u32 {
        self.blocks[block.0 as usize].available()
    }

    /// Number of blocks, including the root.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// The configured block size.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// The arena's pointer codec.
    pub fn codec(&self) -> &PointerCodec {
        &self.codec
    }

    /// The arena's field schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Drop the tail block.
    ///
    /// Only the block with the highest id is removable, and only when
    /// empty, so surviving block ids stay dense. The root block is
    /// permanent: dropping it (when it is the only block) wipes it in
    /// place instead, discarding any entries it still holds.
    pub fn drop_block(&mut self, block: BlockId) -> Result<(), ArenaError> {
        if block.0 as usize + 1 != self.blocks.len() {
            return Err(ArenaError::NotTailBlock { block });
        }
        if block.0 == 0 {
            self.blocks[0].wipe();
            if self.blocks[0].capacity() > 0 {
                self.open.insert(BlockId(0));
            }
            return Ok(());
        }
        let entries = self.blocks[block.0 as usize].entry_count();
        if entries > 0 {
            return Err(ArenaError::BlockOccupied { block, entries });
        }
        self.blocks.pop();
        self.open.swap_remove(&block);
        Ok(())
    }

    /// Drop trailing empty blocks, stopping at the first non-empty
    /// one scanning backward. The root is never removed. Returns the
    /// number of blocks dropped.
    pub fn drop_empty(&mut self) -> usize {
        let mut dropped = 0;
        while self.blocks.len() > 1 && self.blocks[self.blocks.len() - 1].is_empty() {
            let id = BlockId((self.blocks.len() - 1) as u32);
            self.blocks.pop();
            self.open.swap_remove(&id);
            dropped += 1;
        }
        dropped
    }

    /// Discard every entry: drop all extension blocks (occupied or
    /// not) and wipe the root. All previously issued pointers dangle
    /// afterwards.
    pub fn clear(&mut self) {
        self.blocks.truncate(1);
        self.blocks[0].wipe();
        self.open.clear();
        if self.blocks[0].capacity() > 0 {
            self.open.insert(BlockId(0));
        }
    }

    /// Pick the block to allocate from: the root if it has space,
    /// else any open block, else a fresh one.
    fn pick_block(&mut self) -> Result<BlockId, ArenaError> {
        if self.open.contains(&BlockId(0)) {
            return Ok(BlockId(0));
        }
        if let Some(&id) = self.open.first() {
            return Ok(id);
        }
        self.grow()
    }

    /// Append a new block, keeping id == position.
    fn grow(&mut self) -> Result<BlockId, ArenaError> {
        let id = u32::try_from(self.blocks.len())
            .ok()
            .filter(|&id| id < self.codec.max_blocks())
            .map(BlockId)
            .ok_or(ArenaError::OutOfMemory {
                max_blocks: self.codec.max_blocks(),
            })?;
        self.blocks
            .push(Block::new(Arc::clone(&self.schema), self.block_size, false));
        self.open.insert(id);
        Ok(id)
    }

    fn ref_code(&self, name: &str) -> Result<FieldCode, ArenaError> {
        match self.schema.code(name) {
            Some(code) if code.kind() == FieldKind::Reference => Ok(code),
            Some(_) => Err(ArenaError::RawAsPointer {
                name: name.to_owned(),
            }),
            None => Err(ArenaError::UnknownField {
                name: name.to_owned(),
            }),
        }
    }

    fn raw_code(&self, name: &str) -> Result<FieldCode, ArenaError> {
        match self.schema.code(name) {
            Some(code) if code.kind() == FieldKind::Raw => Ok(code),
            Some(_) => Err(ArenaError::PointerAsRaw {
                name: name.to_owned(),
            }),
            None => Err(ArenaError::UnknownRawField {
                name: name.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_arena(block_size: u32) -> Arena<&'static str> {
        Arena::new(
            ArenaConfig::new(block_size)
                .with_fields(["next", "prev"])
                .with_raw_fields(["weight"]),
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_block_size() {
        let err = Arena::<u32>::new(ArenaConfig::new(0)).unwrap_err();
        assert_eq!(err, SchemaError::InvalidBlockSize { block_size: 0 });
        let err = Arena::<u32>::new(ArenaConfig::new(65_537)).unwrap_err();
        assert_eq!(err, SchemaError::InvalidBlockSize { block_size: 65_537 });
        assert!(Arena::<u32>::new(ArenaConfig::new(65_536)).is_ok());
    }

    #[test]
    fn rejects_overlapping_names() {
        let err = Arena::<u32>::new(
            ArenaConfig::new(16).with_fields(["x"]).with_raw_fields(["x"]),
        )
        .unwrap_err();
        assert_eq!(err, SchemaError::NameClash { name: "x".into() });
    }

    #[test]
    fn alloc_never_returns_null() {
        let mut arena = list_arena(4);
        for _ in 0..10 {
            let p = arena.alloc("x").unwrap();
            assert!(!p.is_null());
        }
    }

    #[test]
    fn alloc_free_inverse() {
        let mut arena = list_arena(16);
        let before = arena.len();
        let p = arena.alloc("v").unwrap();
        assert_eq!(arena.value(p), Some(&"v"));
        assert_eq!(arena.len(), before + 1);
        arena.free(p).unwrap();
        assert_eq!(arena.len(), before);
        assert_eq!(arena.value(p), None);
    }

    #[test]
    fn null_operations_error_without_mutation() {
        let mut arena = list_arena(16);
        arena.alloc("x").unwrap();
        let len = arena.len();

        assert_eq!(arena.free(Pointer::NULL), Err(ArenaError::NullFree));
        assert_eq!(arena.erase(Pointer::NULL), Err(ArenaError::NullErase));
        assert_eq!(
            arena.link(Pointer::NULL, "next").unwrap_err(),
            ArenaError::NullRead
        );
        assert_eq!(
            arena.set_link(Pointer::NULL, "next", Pointer::NULL).unwrap_err(),
            ArenaError::NullWrite
        );
        assert_eq!(
            arena.raw(Pointer::NULL, "weight").unwrap_err(),
            ArenaError::NullRead
        );
        assert_eq!(
            arena.set_raw(Pointer::NULL, "weight", 1).unwrap_err(),
            ArenaError::NullWrite
        );
        assert_eq!(arena.links(Pointer::NULL).unwrap_err(), ArenaError::NullRead);
        assert_eq!(
            arena.set_value(Pointer::NULL, "y").unwrap_err(),
            ArenaError::NullWrite
        );
        assert_eq!(arena.value(Pointer::NULL), None);
        assert_eq!(arena.len(), len);
    }

    #[test]
    fn unknown_and_mismatched_field_names() {
        let mut arena = list_arena(16);
        let p = arena.alloc("x").unwrap();

        assert_eq!(
            arena.link(p, "nope").unwrap_err(),
            ArenaError::UnknownField { name: "nope".into() }
        );
        assert_eq!(
            arena.raw(p, "nope").unwrap_err(),
            ArenaError::UnknownRawField { name: "nope".into() }
        );
        assert_eq!(
            arena.link(p, "weight").unwrap_err(),
            ArenaError::RawAsPointer { name: "weight".into() }
        );
        assert_eq!(
            arena.raw(p, "next").unwrap_err(),
            ArenaError::PointerAsRaw { name: "next".into() }
        );
    }

    #[test]
    fn field_kinds_are_isolated() {
        let mut arena = list_arena(16);
        let a = arena.alloc("a").unwrap();
        let b = arena.alloc("b").unwrap();

        arena.set_link(a, "next", b).unwrap();
        arena.set_raw(a, "weight", 0xDEAD_BEEF).unwrap();

        assert_eq!(arena.link(a, "next").unwrap(), b);
        assert_eq!(arena.raw(a, "weight").unwrap(), 0xDEAD_BEEF);

        // Overwriting one kind leaves the other untouched.
        arena.set_raw(a, "weight", 7).unwrap();
        assert_eq!(arena.link(a, "next").unwrap(), b);
        arena.set_link(a, "next", Pointer::NULL).unwrap();
        assert_eq!(arena.raw(a, "weight").unwrap(), 7);
    }

    #[test]
    fn alloc_with_initialises_fields() {
        let mut arena = list_arena(16);
        let a = arena.alloc("a").unwrap();
        let b = arena
            .alloc_with("b", &[("prev", a)], &[("weight", 3)])
            .unwrap();
        assert_eq!(arena.link(b, "prev").unwrap(), a);
        assert_eq!(arena.link(b, "next").unwrap(), Pointer::NULL);
        assert_eq!(arena.raw(b, "weight").unwrap(), 3);
    }

    #[test]
    fn alloc_with_rejects_bad_names_before_allocating() {
        let mut arena = list_arena(16);
        let len = arena.len();
        let err = arena.alloc_with("x", &[("weight", Pointer::NULL)], &[]);
        assert_eq!(
            err.unwrap_err(),
            ArenaError::RawAsPointer { name: "weight".into() }
        );
        assert_eq!(arena.len(), len);
    }

    #[test]
    fn bulk_snapshot_and_bulk_set() {
        let mut arena = list_arena(16);
        let a = arena.alloc("a").unwrap();
        let b = arena.alloc("b").unwrap();

        arena.set_links(a, &[("next", b), ("prev", a)]).unwrap();
        arena.set_raws(a, &[("weight", 11)]).unwrap();

        let links = arena.links(a).unwrap();
        assert_eq!(links["next"], b);
        assert_eq!(links["prev"], a);
        assert_eq!(arena.raws(a).unwrap()["weight"], 11);

        // A bad key in the batch fails the whole batch.
        let err = arena.set_links(a, &[("next", a), ("bogus", b)]);
        assert_eq!(
            err.unwrap_err(),
            ArenaError::UnknownField { name: "bogus".into() }
        );
        assert_eq!(arena.links(a).unwrap()["next"], b);
    }

    #[test]
    fn bulk_snapshot_of_freed_slot_is_all_null() {
        let mut arena = list_arena(16);
        let a = arena.alloc("a").unwrap();
        let b = arena.alloc("b").unwrap();
        arena.set_link(a, "next", b).unwrap();
        arena.set_raw(a, "weight", 5).unwrap();
        arena.free(a).unwrap();

        // Single-field reads still see the stale words...
        assert_eq!(arena.link(a, "next").unwrap(), b);
        // ...but the bulk snapshot reports an unoccupied slot as empty.
        assert_eq!(arena.links(a).unwrap()["next"], Pointer::NULL);
        assert_eq!(arena.raws(a).unwrap()["weight"], 0);
    }

    #[test]
    fn root_block_fills_before_growth() {
        let mut arena = list_arena(5);
        // Root reserves slot 0: four usable entries.
        assert_eq!(arena.available(BlockId(0)), 4);
        for _ in 0..4 {
            arena.alloc("x").unwrap();
        }
        assert_eq!(arena.available(BlockId(0)), 0);
        assert_eq!(arena.block_count(), 1);

        let p = arena.alloc("overflow").unwrap();
        assert_eq!(arena.block_count(), 2);
        let (block, _) = arena.codec().decode(p);
        assert_eq!(block, BlockId(1));
        // Extension blocks have no reserved slot.
        assert_eq!(arena.available(BlockId(1)), 4);
    }

    #[test]
    fn freed_space_is_reused_before_growing() {
        let mut arena = list_arena(4);
        let mut last = Pointer::NULL;
        for _ in 0..7 {
            last = arena.alloc("x").unwrap();
        }
        assert_eq!(arena.block_count(), 2);
        arena.free(last).unwrap();
        arena.alloc("y").unwrap();
        assert_eq!(arena.block_count(), 2);
    }

    #[test]
    fn erase_scrubs_fields() {
        let mut arena = list_arena(16);
        let a = arena.alloc("a").unwrap();
        let b = arena.alloc("b").unwrap();
        arena.set_link(a, "next", b).unwrap();
        arena.erase(a).unwrap();
        assert_eq!(arena.link(a, "next").unwrap(), Pointer::NULL);
    }

    #[test]
    fn clear_discards_everything() {
        let mut arena = list_arena(4);
        for _ in 0..10 {
            arena.alloc("x").unwrap();
        }
        assert!(arena.block_count() > 1);
        arena.clear();
        assert_eq!(arena.block_count(), 1);
        assert!(arena.is_empty());
        arena.alloc("fresh").unwrap();
    }

    #[test]
    fn value_roundtrip_with_owned_payloads() {
        let mut arena: Arena<String> = Arena::new(ArenaConfig::new(8)).unwrap();
        let p = arena.alloc("hello".to_owned()).unwrap();
        assert_eq!(arena.value(p).map(String::as_str), Some("hello"));
        arena.set_value(p, "world".to_owned()).unwrap();
        assert_eq!(arena.value(p).map(String::as_str), Some("world"));
    }
}
