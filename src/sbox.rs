//! The AES substitution tables, generated rather than hardcoded.
//!
//! Both tables are built once on first use and shared read-only for the
//! rest of the process, so concurrent readers need no locking.

use crate::gf::mul;
use std::sync::OnceLock;

/// Inverse of 3 in GF(2^8); stepping q by it keeps p*q == 1 as p steps by 3.
const INV3: u8 = 0xf6;

/// The forward and inverse substitution tables as one unit.
pub struct Tables {
    pub sbox: [u8; 256],
    pub inverse_sbox: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Shared substitution tables, built and validated on first access.
pub fn tables() -> &'static Tables {
    TABLES.get_or_init(build_tables)
}

/// Forward S-box lookup.
#[inline]
pub fn sub(byte: u8) -> u8 {
    tables().sbox[byte as usize]
}

/// Inverse S-box lookup.
#[inline]
pub fn inv_sub(byte: u8) -> u8 {
    tables().inverse_sbox[byte as usize]
}

/// Derive both tables from scratch.
///
/// Walks the whole multiplicative group of GF(2^8): `p` runs through the
/// powers of 3 (a generator) while `q` runs through the powers of its
/// inverse, so `q` is always the multiplicative inverse of `p`. The S-box
/// entry for `p` is the AES affine transform of that inverse. Zero has no
/// inverse and is pinned to 0x63 separately.
fn build_tables() -> Tables {
    let mut sbox = [0u8; 256];

    let mut p: u8 = 1;
    let mut q: u8 = 1;
    loop {
        p = mul(p, 3);
        q = mul(q, INV3);

        let affine =
            q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4);
        sbox[p as usize] = affine ^ 0x63;

        if p == 1 {
            break;
        }
    }
    sbox[0] = 0x63;

    let mut inverse_sbox = [0u8; 256];
    let mut seen = [false; 256];
    for x in 0..=255u8 {
        let s = sbox[x as usize];
        assert!(!seen[s as usize], "S-box is not a permutation");
        seen[s as usize] = true;
        inverse_sbox[s as usize] = x;
    }

    Tables {
        sbox,
        inverse_sbox,
    }
}
