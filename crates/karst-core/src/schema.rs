//! The immutable field schema shared by every block in an arena.
//!
//! A [`Schema`] is built once, at arena construction, and never
//! mutated afterwards. Blocks hold it behind an `Arc` and consult it
//! for slab counts; the arena consults it to resolve field names.

use std::fmt;

use indexmap::IndexMap;

use crate::error::SchemaError;

/// The two kinds of per-entry field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Holds a [`Pointer`](crate::Pointer); 0 means "unset".
    Reference,
    /// Holds an arbitrary `u32`, never interpreted as a pointer.
    Raw,
}

/// A resolved field identifier.
///
/// Packs the field kind and its slab index into one signed word:
/// non-negative codes index the reference slabs directly, negative
/// codes index the raw slabs through bitwise complement. Codes are
/// only produced by [`Schema::code`] and are valid for exactly the
/// schema that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldCode(i32);

impl FieldCode {
    fn reference(index: usize) -> Self {
        Self(index as i32)
    }

    fn raw(index: usize) -> Self {
        Self(!(index as i32))
    }

    /// Which kind of field this code resolves to.
    pub fn kind(self) -> FieldKind {
        if self.0 >= 0 {
            FieldKind::Reference
        } else {
            FieldKind::Raw
        }
    }

    /// The slab index within this code's kind.
    pub fn index(self) -> usize {
        if self.0 >= 0 {
            self.0 as usize
        } else {
            !self.0 as usize
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            FieldKind::Reference => write!(f, "ref[{}]", self.index()),
            FieldKind::Raw => write!(f, "raw[{}]", self.index()),
        }
    }
}

/// Field-name registry for one arena.
///
/// Maps each declared field name to its [`FieldCode`]. Reference and
/// raw names share a single namespace: a name may appear at most once
/// across both kinds. The map preserves declaration order (reference
/// fields first, then raw fields), which is the order bulk snapshots
/// report fields in.
#[derive(Debug)]
pub struct Schema {
    codes: IndexMap<String, FieldCode>,
    field_count: usize,
    raw_count: usize,
}

impl Schema {
    /// Build a schema from ordered reference and raw field names.
    ///
    /// Returns [`SchemaError::NameClash`] if any name repeats, within
    /// a kind or across kinds.
    pub fn new<S: AsRef<str>>(fields: &[S], raw_fields: &[S]) -> Result<Self, SchemaError> {
        let mut codes = IndexMap::with_capacity(fields.len() + raw_fields.len());
        for (index, name) in fields.iter().enumerate() {
            let name = name.as_ref();
            if codes
                .insert(name.to_owned(), FieldCode::reference(index))
                .is_some()
            {
                return Err(SchemaError::NameClash {
                    name: name.to_owned(),
                });
            }
        }
        for (index, name) in raw_fields.iter().enumerate() {
            let name = name.as_ref();
            if codes.insert(name.to_owned(), FieldCode::raw(index)).is_some() {
                return Err(SchemaError::NameClash {
                    name: name.to_owned(),
                });
            }
        }
        Ok(Self {
            codes,
            field_count: fields.len(),
            raw_count: raw_fields.len(),
        })
    }

    /// Resolve a field name to its code, or `None` if undeclared.
    pub fn code(&self, name: &str) -> Option<FieldCode> {
        self.codes.get(name).copied()
    }

    /// Number of reference fields.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Number of raw fields.
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Declared names of the given kind, in declaration order.
    pub fn names(&self, kind: FieldKind) -> impl Iterator<Item = (&str, FieldCode)> + '_ {
        self.codes
            .iter()
            .filter(move |(_, code)| code.kind() == kind)
            .map(|(name, &code)| (name.as_str(), code))
    }
}
