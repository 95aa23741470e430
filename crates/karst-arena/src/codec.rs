//! Bit-packed pointer encoding.
//!
//! A [`PointerCodec`] fixes, per arena, how a [`Pointer`] splits into
//! `(BlockId, Slot)`: the slot occupies the low 8 bits when the block
//! size fits in a byte, the low 16 bits otherwise, and the block id
//! takes whatever remains. `u32` arithmetic is unsigned, so shifts
//! into and out of the top bit need no sign correction.

use karst_core::{BlockId, Pointer, Slot};

/// Encodes and decodes pointers for one arena's block size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerCodec {
    shift: u32,
    slot_mask: u32,
}

impl PointerCodec {
    /// Build the codec for a block size in `1..=65536`.
    ///
    /// Block sizes up to 256 get an 8-bit slot and a 24-bit block id;
    /// larger sizes get a 16/16 split.
    pub fn new(block_size: u32) -> Self {
        debug_assert!((1..=65_536).contains(&block_size));
        let shift = if block_size <= 256 { 8 } else { 16 };
        Self {
            shift,
            slot_mask: (1 << shift) - 1,
        }
    }

    /// Pack a block id and slot into a pointer.
    ///
    /// Valid for `block < max_blocks()` and `slot <= slot_mask()`;
    /// out-of-range inputs alias other pointers silently, so the
    /// arena enforces both bounds before encoding.
    pub fn encode(&self, block: BlockId, slot: Slot) -> Pointer {
        Pointer((block.0 << self.shift) | slot.0)
    }

    /// Unpack a pointer into its block id and slot.
    pub fn decode(&self, pointer: Pointer) -> (BlockId, Slot) {
        (
            BlockId(pointer.0 >> self.shift),
            Slot(pointer.0 & self.slot_mask),
        )
    }

    /// Number of block ids the encoding can address: 2^24 for the
    /// 8-bit slot split, 2^16 for the 16-bit one.
    pub fn max_blocks(&self) -> u32 {
        1 << (32 - self.shift)
    }

    /// Mask covering the slot bits.
    pub fn slot_mask(&self) -> u32 {
        self.slot_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_blocks_use_eight_slot_bits() {
        let codec = PointerCodec::new(256);
        assert_eq!(codec.slot_mask(), 0xFF);
        assert_eq!(codec.max_blocks(), 1 << 24);
    }

    #[test]
    fn large_blocks_use_sixteen_slot_bits() {
        let codec = PointerCodec::new(257);
        assert_eq!(codec.slot_mask(), 0xFFFF);
        assert_eq!(codec.max_blocks(), 1 << 16);
    }

    #[test]
    fn encode_places_block_in_high_bits() {
        let codec = PointerCodec::new(256);
        assert_eq!(codec.encode(BlockId(1), Slot(2)), Pointer(0x0102));
        let codec = PointerCodec::new(65_536);
        assert_eq!(codec.encode(BlockId(1), Slot(2)), Pointer(0x0001_0002));
    }

    #[test]
    fn top_bit_block_ids_round_trip() {
        // Block ids with the sign bit of an i32 set must survive the
        // shift unchanged.
        let codec = PointerCodec::new(256);
        let block = BlockId((1 << 24) - 1);
        let (b, s) = codec.decode(codec.encode(block, Slot(255)));
        assert_eq!(b, block);
        assert_eq!(s, Slot(255));

        let codec = PointerCodec::new(65_536);
        let block = BlockId((1 << 16) - 1);
        let (b, s) = codec.decode(codec.encode(block, Slot(65_535)));
        assert_eq!(b, block);
        assert_eq!(s, Slot(65_535));
    }

    #[test]
    fn null_decodes_to_reserved_origin() {
        let codec = PointerCodec::new(64);
        assert_eq!(codec.decode(Pointer::NULL), (BlockId(0), Slot(0)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_narrow(block in 0u32..(1 << 24), slot in 0u32..=255) {
                let codec = PointerCodec::new(256);
                let p = codec.encode(BlockId(block), Slot(slot));
                prop_assert_eq!(codec.decode(p), (BlockId(block), Slot(slot)));
            }

            #[test]
            fn round_trip_wide(block in 0u32..(1 << 16), slot in 0u32..=65_535) {
                let codec = PointerCodec::new(65_536);
                let p = codec.encode(BlockId(block), Slot(slot));
                prop_assert_eq!(codec.decode(p), (BlockId(block), Slot(slot)));
            }

            #[test]
            fn encoding_is_injective(
                a in (0u32..(1 << 16), 0u32..=65_535),
                b in (0u32..(1 << 16), 0u32..=65_535),
            ) {
                let codec = PointerCodec::new(65_536);
                let pa = codec.encode(BlockId(a.0), Slot(a.1));
                let pb = codec.encode(BlockId(b.0), Slot(b.1));
                prop_assert_eq!(pa == pb, a == b);
            }
        }
    }
}
