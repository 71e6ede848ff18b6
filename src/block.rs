//! The 16-byte block and its two layouts.
//!
//! A block read from a file is in *stream order*. The round functions
//! assume *state order*, the FIPS-197 4x4 matrix convention where
//! state[r][c] = stream[r + 4c], laid out row-major in the buffer.
//! [`transpose`] flips between the two and is its own inverse, so it is
//! applied once on the way into a block operation and once on the way out.

/// The cipher's fixed unit of operation.
pub const BLOCK_SIZE: usize = 16;

/// Side length of the 4x4 state grid.
pub const GRID_SIZE: usize = 4;

/// A 16-byte block, in either layout.
pub type Block = [u8; BLOCK_SIZE];

/// Swap a block between stream order and state order, in place.
///
/// Transposes the 4x4 grid: byte `i + 4j` trades places with `4i + j`.
/// Applying it twice restores the original layout.
pub fn transpose(block: &mut Block) {
    for i in 0..GRID_SIZE {
        for j in i + 1..GRID_SIZE {
            block.swap(i + GRID_SIZE * j, GRID_SIZE * i + j);
        }
    }
}

/// XOR `rhs` into `block` byte-wise.
pub fn xor_block(block: &mut Block, rhs: &Block) {
    for (b, r) in block.iter_mut().zip(rhs.iter()) {
        *b ^= r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_maps_rows_to_columns() {
        let mut block: Block = core::array::from_fn(|i| i as u8);
        transpose(&mut block);
        // stream[r + 4c] must land at state slot 4r + c
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(block[4 * r + c] as usize, r + 4 * c);
            }
        }
    }

    #[test]
    fn test_transpose_is_self_inverse() {
        let original: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        let mut block = original;
        transpose(&mut block);
        assert_ne!(block, original);
        transpose(&mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn test_xor_block() {
        let mut block = [0xffu8; BLOCK_SIZE];
        let rhs: Block = core::array::from_fn(|i| i as u8);
        xor_block(&mut block, &rhs);
        for (i, b) in block.iter().enumerate() {
            assert_eq!(*b, 0xff ^ i as u8);
        }
        // XORing the same value again cancels out
        xor_block(&mut block, &rhs);
        assert_eq!(block, [0xff; BLOCK_SIZE]);
    }
}
