//! The four round transformations and their inverses.
//!
//! All functions operate in place on a block in state order (see
//! [`crate::block`]): row `r` occupies bytes `4r..4r+4`, column `c` sits
//! at stride-4 offsets starting at `c`.

use crate::block::{xor_block, Block, GRID_SIZE};
use crate::gf::{mul, mul2, mul3};
use crate::sbox::{inv_sub, sub};

/// Forward MixColumns matrix: {2,3,1,1} rotated through the rows.
const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse MixColumns matrix: {0xe,0xb,0xd,0x9} rotated through the rows.
const INVERSE_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Substitute every byte through the forward S-box.
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sub(*byte);
    }
}

/// Substitute every byte through the inverse S-box.
pub fn inverse_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sub(*byte);
    }
}

/// Rotate state row `r` left by `r` positions (row 0 stays put).
pub fn shift_rows(state: &mut Block) {
    for r in 1..GRID_SIZE {
        state[GRID_SIZE * r..GRID_SIZE * (r + 1)].rotate_left(r);
    }
}

/// Rotate state row `r` right by `r` positions, undoing [`shift_rows`].
pub fn inverse_shift_rows(state: &mut Block) {
    for r in 1..GRID_SIZE {
        state[GRID_SIZE * r..GRID_SIZE * (r + 1)].rotate_right(r);
    }
}

/// Multiply every state column by the forward MixColumns matrix.
///
/// The forward matrix only contains coefficients 1, 2, and 3, so each
/// entry dispatches to the identity, `mul2`, or `mul3` fast path.
pub fn mix_columns(state: &mut Block) {
    for c in 0..GRID_SIZE {
        let mut column = [0u8; GRID_SIZE];
        for (r, out) in column.iter_mut().enumerate() {
            for k in 0..GRID_SIZE {
                let byte = state[c + GRID_SIZE * k];
                *out ^= match MIX_MATRIX[r][k] {
                    0x01 => byte,
                    0x02 => mul2(byte),
                    _ => mul3(byte),
                };
            }
        }
        for (r, value) in column.into_iter().enumerate() {
            state[c + GRID_SIZE * r] = value;
        }
    }
}

/// Multiply every state column by the inverse MixColumns matrix.
///
/// Coefficients run up to 0xe here, so this uses the general field
/// multiply throughout.
pub fn inverse_mix_columns(state: &mut Block) {
    for c in 0..GRID_SIZE {
        let mut column = [0u8; GRID_SIZE];
        for (r, out) in column.iter_mut().enumerate() {
            for k in 0..GRID_SIZE {
                *out ^= mul(state[c + GRID_SIZE * k], INVERSE_MIX_MATRIX[r][k]);
            }
        }
        for (r, value) in column.into_iter().enumerate() {
            state[c + GRID_SIZE * r] = value;
        }
    }
}

/// XOR a round key into the state.
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_block(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BLOCK_SIZE;
    use proptest::prelude::*;

    #[test]
    fn test_shift_rows_known_layout() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        let expected: Block = [
            0, 1, 2, 3, // row 0 untouched
            5, 6, 7, 4, // rotated by 1
            10, 11, 8, 9, // rotated by 2
            15, 12, 13, 14, // rotated by 3
        ];
        assert_eq!(state, expected);
    }

    #[test]
    fn test_mix_columns_fips_column() {
        // FIPS-197 section 5.1.3 example column: db 13 53 45 -> 8e 4d a1 bc
        let mut state = [0u8; BLOCK_SIZE];
        state[0] = 0xdb;
        state[4] = 0x13;
        state[8] = 0x53;
        state[12] = 0x45;
        mix_columns(&mut state);
        assert_eq!(
            [state[0], state[4], state[8], state[12]],
            [0x8e, 0x4d, 0xa1, 0xbc]
        );
    }

    #[test]
    fn test_add_round_key_is_involutive() {
        let mut state: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(11));
        let key: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(29));
        let original = state;
        add_round_key(&mut state, &key);
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }

    proptest! {
        #[test]
        fn prop_sub_bytes_round_trips(state: [u8; BLOCK_SIZE]) {
            let mut s = state;
            sub_bytes(&mut s);
            inverse_sub_bytes(&mut s);
            prop_assert_eq!(s, state);
        }

        #[test]
        fn prop_shift_rows_round_trips(state: [u8; BLOCK_SIZE]) {
            let mut s = state;
            shift_rows(&mut s);
            inverse_shift_rows(&mut s);
            prop_assert_eq!(s, state);
        }

        #[test]
        fn prop_mix_columns_round_trips(state: [u8; BLOCK_SIZE]) {
            let mut s = state;
            mix_columns(&mut s);
            inverse_mix_columns(&mut s);
            prop_assert_eq!(s, state);
        }
    }
}
