//! Benchmark profiles for the karst pointer arena.
//!
//! Provides pre-built arena configurations shared by the criterion
//! benches, sized so that allocation churn spans several blocks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use karst_arena::{Arena, ArenaConfig};

/// A doubly-linked-list style schema: two reference fields and one
/// raw field, 256-entry blocks (8-bit slot split).
pub fn list_profile() -> Arena<u64> {
    Arena::new(
        ArenaConfig::new(256)
            .with_fields(["next", "prev"])
            .with_raw_fields(["weight"]),
    )
    .expect("static profile config is valid")
}

/// A wide-block profile: 4096-entry blocks (16-bit slot split).
pub fn wide_profile() -> Arena<u64> {
    Arena::new(
        ArenaConfig::new(4096)
            .with_fields(["next", "prev"])
            .with_raw_fields(["weight"]),
    )
    .expect("static profile config is valid")
}
