//! Rijndael key expansion for AES-128.

use crate::block::{transpose, Block, BLOCK_SIZE};
use crate::sbox::sub;

/// Length of the main key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys (initial whitening key plus one per round).
pub const KEY_ROUNDS: usize = 11;

/// The ten round constants: successive doublings of 1 in GF(2^8).
const RCON: [u8; 10] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36,
];

/// The expanded key: 11 round keys, stored in state order so they can be
/// XORed straight into a transposed block.
///
/// An owned, stack-sized value; each encrypt/decrypt call derives its own
/// and drops it on return.
pub struct RoundKeys([Block; KEY_ROUNDS]);

impl RoundKeys {
    /// Expand a 16-byte key into the full 11-round schedule.
    ///
    /// The 44-word recurrence from FIPS-197 section 5.2: every fourth word
    /// is rotated, substituted, and round-constant-mixed before the XOR
    /// with the word one key-length back; the rest XOR directly.
    pub fn derive(key: &[u8; KEY_SIZE]) -> Self {
        let mut words = [[0u8; 4]; 4 * KEY_ROUNDS];
        for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in 4..4 * KEY_ROUNDS {
            let mut temp = words[i - 1];
            if i % 4 == 0 {
                temp.rotate_left(1);
                for byte in temp.iter_mut() {
                    *byte = sub(*byte);
                }
                temp[0] ^= RCON[i / 4 - 1];
            }
            for (t, prev) in temp.iter_mut().zip(words[i - 4].iter()) {
                *t ^= prev;
            }
            words[i] = temp;
        }

        let mut rounds = [[0u8; BLOCK_SIZE]; KEY_ROUNDS];
        for (round, quad) in rounds.iter_mut().zip(words.chunks_exact(4)) {
            for (slot, word) in round.chunks_exact_mut(4).zip(quad) {
                slot.copy_from_slice(word);
            }
            // Round keys live in the same state-order layout as the data
            transpose(round);
        }

        RoundKeys(rounds)
    }

    /// The round key for round `i` (0..=10), in state order.
    #[inline]
    pub fn round(&self, i: usize) -> &Block {
        &self.0[i]
    }
}
