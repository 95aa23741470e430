//! Block-structured pointer arena with bit-packed handles.
//!
//! Hands out integer [`Pointer`]s into pre-allocated numeric slabs,
//! as a building block for pointer-based structures (linked lists,
//! trees) that want index stability without a garbage-collected
//! object graph.
//!
//! # Architecture
//!
//! ```text
//! Arena<T> (orchestrator, owns block 0's peers)
//! ├── Block<T>[] (fixed-capacity storage units, created on demand)
//! │   ├── values:     Vec<Option<T>>        (payloads, None = free)
//! │   ├── fields:     Vec<u32> per ref name (pointers, 0 = null)
//! │   ├── raw fields: Vec<u32> per raw name (opaque u32s)
//! │   └── FreeList                          (LIFO slot reuse)
//! ├── IndexSet<BlockId> (blocks with spare capacity)
//! ├── Arc<Schema>       (name → FieldCode, immutable, shared)
//! └── PointerCodec      (BlockId/Slot ⇄ Pointer bit split)
//! ```
//!
//! A pointer is a `u32` packing `(block id, slot)`: 8 slot bits when
//! the block size fits in a byte, 16 otherwise. Pointer 0 is null.
//!
//! # Manual management
//!
//! Entries live until explicitly freed. Freeing does not clear an
//! entry's field slabs, so pointers stored elsewhere dangle silently
//! until overwritten or [`Arena::erase`]d — a deliberate trade of
//! safety for speed, same as the free-list reuse that may hand a new
//! entry an old slot. Nothing here is thread-safe; wrap the whole
//! arena in one lock if shared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod block;
pub mod codec;
pub mod config;
pub mod error;
pub mod free_list;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;

pub use karst_core::{BlockId, FieldCode, FieldKind, Pointer, Schema, SchemaError, Slot};
