//! Arena configuration parameters.

/// Configuration for an [`Arena`](crate::Arena).
///
/// Declares the field schema and block size. Validated once by
/// `Arena::new`; everything here is immutable after construction —
/// fields cannot be added, renamed, or resized on a live arena.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Reference-field names, in declaration order. Each entry holds
    /// a pointer; 0 means "unset".
    pub fields: Vec<String>,

    /// Raw-field names, in declaration order. Each entry holds an
    /// arbitrary `u32` that is never interpreted as a pointer. Must
    /// be disjoint from `fields`.
    pub raw_fields: Vec<String>,

    /// Entries per block, in `1..=65536`.
    ///
    /// Sizes up to 256 give pointers an 8-bit slot and a 24-bit block
    /// id; larger sizes split 16/16. Slot 0 of block 0 is reserved
    /// for the null pointer, so the root block holds one entry fewer
    /// than `block_size`.
    pub block_size: u32,
}

impl ArenaConfig {
    /// Largest supported block size: one full 16-bit slot space.
    pub const MAX_BLOCK_SIZE: u32 = 65_536;

    /// Default block size.
    pub const DEFAULT_BLOCK_SIZE: u32 = 256;

    /// Create a config with the given block size and no fields.
    pub fn new(block_size: u32) -> Self {
        Self {
            fields: Vec::new(),
            raw_fields: Vec::new(),
            block_size,
        }
    }

    /// Declare the reference-field names.
    pub fn with_fields<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the raw-field names.
    pub fn with_raw_fields<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.raw_fields = names.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_SIZE)
    }
}
