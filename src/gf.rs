//! Arithmetic in GF(2^8), the field every byte of the cipher lives in.
//!
//! Elements are bytes, addition is XOR, and multiplication is carryless
//! with reduction modulo the AES polynomial x^8 + x^4 + x^3 + x + 1
//! (0x11b; only the low 0x1b matters once the top bit has been shifted
//! out).

/// Reduction constant for the AES field polynomial.
const POLY: u8 = 0x1b;

/// General multiplication of two field elements.
///
/// Russian-peasant style: walk the bits of `b` from low to high, XORing
/// `a` into the product for each set bit and doubling `a` in the field
/// each step.
pub fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;

    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }

        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= POLY;
        }
        b >>= 1;
    }

    product
}

/// Multiplication by 2 (the polynomial x), the field's doubling step.
pub fn mul2(a: u8) -> u8 {
    if a & 0x80 != 0 {
        (a << 1) ^ POLY
    } else {
        a << 1
    }
}

/// Multiplication by 3 = x + 1, so 3a = 2a + a.
pub fn mul3(a: u8) -> u8 {
    a ^ mul2(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(1, a), a);
            assert_eq!(mul(a, 0), 0);
            assert_eq!(mul(0, a), 0);
        }
    }

    #[test]
    fn test_mul_commutes() {
        for a in (0..=255u8).step_by(7) {
            for b in 0..=255u8 {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn test_fips_worked_example() {
        // {57} * {83} = {c1}, from FIPS-197 section 4.2
        assert_eq!(mul(0x57, 0x83), 0xc1);
        // {57} * {13} = {fe}, from the xtime example in the same section
        assert_eq!(mul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn test_mul2_matches_general_mul() {
        for a in 0..=255u8 {
            assert_eq!(mul2(a), mul(a, 2));
        }
    }

    #[test]
    fn test_mul3_matches_general_mul() {
        for a in 0..=255u8 {
            assert_eq!(mul3(a), mul(a, 3));
        }
    }

    #[test]
    fn test_three_times_its_inverse_is_one() {
        // 0xf6 is the multiplicative inverse of 3; the S-box generator
        // leans on this pair.
        assert_eq!(mul(3, 0xf6), 1);
    }
}
