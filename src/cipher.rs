//! Single-block AES-128 encryption and decryption.
//!
//! Both drivers take a block in stream order, convert it to state order,
//! run the rounds, and convert back. The transpose at entry and exit must
//! stay symmetric: dropping either one corrupts output silently.

use crate::block::{transpose, Block};
use crate::round::{
    add_round_key, inverse_mix_columns, inverse_shift_rows, inverse_sub_bytes, mix_columns,
    shift_rows, sub_bytes,
};
use crate::schedule::{RoundKeys, KEY_ROUNDS};

/// Encrypt one 16-byte block in place.
pub fn encrypt_block(block: &mut Block, keys: &RoundKeys) {
    transpose(block);

    add_round_key(block, keys.round(0));

    for i in 1..KEY_ROUNDS - 1 {
        sub_bytes(block);
        shift_rows(block);
        mix_columns(block);
        add_round_key(block, keys.round(i));
    }

    sub_bytes(block);
    shift_rows(block);
    add_round_key(block, keys.round(KEY_ROUNDS - 1));

    transpose(block);
}

/// Decrypt one 16-byte block in place; the exact inverse of
/// [`encrypt_block`] step for step, run backwards.
pub fn decrypt_block(block: &mut Block, keys: &RoundKeys) {
    transpose(block);

    add_round_key(block, keys.round(KEY_ROUNDS - 1));

    for i in (1..KEY_ROUNDS - 1).rev() {
        inverse_shift_rows(block);
        inverse_sub_bytes(block);
        add_round_key(block, keys.round(i));
        inverse_mix_columns(block);
    }

    inverse_shift_rows(block);
    inverse_sub_bytes(block);
    add_round_key(block, keys.round(0));

    transpose(block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    // FIPS-197 appendix C.1 / the classic AES-128 known-answer vector
    const KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
        0x0e, 0x0f,
    ];
    const PLAIN: Block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
        0xee, 0xff,
    ];
    const CIPHER: Block = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
        0xc5, 0x5a,
    ];

    #[test]
    fn test_encrypt_known_answer() {
        let keys = RoundKeys::derive(&KEY);
        let mut block = PLAIN;
        encrypt_block(&mut block, &keys);
        assert_eq!(block, CIPHER);
    }

    #[test]
    fn test_decrypt_known_answer() {
        let keys = RoundKeys::derive(&KEY);
        let mut block = CIPHER;
        decrypt_block(&mut block, &keys);
        assert_eq!(block, PLAIN);
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let mut key = [0u8; 16];
            let mut block: Block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let keys = RoundKeys::derive(&key);
            let original = block;
            encrypt_block(&mut block, &keys);
            assert_ne!(block, original, "encryption must change the block");
            decrypt_block(&mut block, &keys);
            assert_eq!(block, original);
        }
    }

    #[test]
    fn test_blocks_are_independent() {
        // ECB-style: identical plaintext blocks give identical ciphertext
        let keys = RoundKeys::derive(&KEY);
        let mut a = PLAIN;
        let mut b = PLAIN;
        encrypt_block(&mut a, &keys);
        encrypt_block(&mut b, &keys);
        assert_eq!(a, b);
    }
}
