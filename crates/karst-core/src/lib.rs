//! Core types for the karst pointer arena.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the handle newtypes ([`Pointer`], [`BlockId`], [`Slot`]), the
//! immutable field [`Schema`], and the construction-time error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod schema;

pub use error::SchemaError;
pub use id::{BlockId, Pointer, Slot};
pub use schema::{FieldCode, FieldKind, Schema};
