//! rijn - teaching-grade AES-128 file encryption
//!
//! A from-scratch AES-128 block cipher and a file codec around it. The
//! cipher core is built up from first principles: GF(2^8) arithmetic, a
//! generated S-box, the Rijndael key schedule, and the four round
//! transformations, all following FIPS-197.
//!
//! ## Encryption pipeline
//!
//! ```text
//! key  → key schedule → 11 round keys (state order)
//! file → pad + length trailer → 16-byte blocks → encrypt each → ciphertext
//! ```
//!
//! Decryption runs the blocks through the inverse rounds, then truncates
//! the output to the original length recorded in the trailer.
//!
//! Each block is encrypted independently (ECB-style): no IV, no chaining,
//! no authentication. Substitution is plain table lookup, so nothing here
//! is constant-time. This is a cipher to learn from, not to rely on.
//!
//! ## Example
//!
//! ```no_run
//! use rijn::codec::{decrypt_file, encrypt_file};
//! use std::path::Path;
//!
//! let key = *b"0123456789abcdef";
//! encrypt_file(Path::new("notes.txt"), Path::new("notes.txt.aes"), &key)?;
//! decrypt_file(Path::new("notes.txt.aes"), Path::new("notes.txt"), &key)?;
//! # Ok::<(), rijn::RijnError>(())
//! ```

pub mod block;
pub mod cipher;
pub mod codec;
pub mod error;
pub mod gf;
pub mod round;
pub mod sbox;
pub mod schedule;

pub use block::{Block, BLOCK_SIZE};
pub use cipher::{decrypt_block, encrypt_block};
pub use codec::{decrypt_file, encrypt_file};
pub use error::{Result, RijnError};
pub use schedule::{RoundKeys, KEY_SIZE};
