//! Karst: a block-structured pointer arena for manually-managed
//! linked data structures.
//!
//! Karst hands out `u32` [`Pointer`](types::Pointer)s into
//! pre-allocated numeric slabs. Linked lists, trees, and other
//! pointer-heavy structures build on it to get stable integer handles
//! and explicit lifetimes instead of a garbage-collected object
//! graph. Allocation reuses freed slots LIFO per block; storage grows
//! block by block as the arena fills.
//!
//! # Quick start
//!
//! ```rust
//! use karst::prelude::*;
//!
//! // One payload type, two reference fields, one raw field.
//! let mut arena: Arena<&str> = Arena::new(
//!     ArenaConfig::new(256)
//!         .with_fields(["next", "prev"])
//!         .with_raw_fields(["weight"]),
//! )
//! .unwrap();
//!
//! let a = arena.alloc("first").unwrap();
//! let b = arena.alloc_with("second", &[("prev", a)], &[("weight", 10)]).unwrap();
//! arena.set_link(a, "next", b).unwrap();
//!
//! assert_eq!(arena.link(a, "next").unwrap(), b);
//! assert_eq!(arena.link(b, "prev").unwrap(), a);
//! assert_eq!(arena.value(b), Some(&"second"));
//!
//! // Lifetimes are manual: freeing A leaves B's back-reference
//! // dangling until overwritten or erased.
//! arena.free(a).unwrap();
//! assert_eq!(arena.value(a), None);
//! assert_eq!(arena.link(b, "prev").unwrap(), a);
//! ```
//!
//! # Crates
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `karst-arena` | `Arena`, blocks, codec, free list |
//! | [`types`] | `karst-core` | Handle newtypes, schema, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The arena allocator and its components (`karst-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::ArenaConfig`],
/// both in the [`prelude`].
pub use karst_arena as arena;

/// Handle newtypes, the field schema, and error types (`karst-core`).
pub use karst_core as types;

/// Common imports for typical karst usage.
///
/// ```rust
/// use karst::prelude::*;
/// ```
pub mod prelude {
    pub use karst_arena::{Arena, ArenaConfig, ArenaError};
    pub use karst_core::{BlockId, Pointer, SchemaError, Slot};
}
