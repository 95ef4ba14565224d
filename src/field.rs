use std::{fmt, sync::LazyLock};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{
    ShamirError,
    shamir_error::Result,
    constants::{SHAMIR_PRIME_BITS, SHAMIR_PRIME_OFFSET},
};

static DEFAULT_FIELD: LazyLock<PrimeField> = LazyLock::new(|| {
    let modulus = (BigUint::one() << SHAMIR_PRIME_BITS) - SHAMIR_PRIME_OFFSET;
    PrimeField::from_modulus(modulus)
});

/// The prime field `GF(p)`. Every operation returns a canonical element in
/// `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    signed_modulus: BigInt,
    byte_len: usize,
}

/// An element of a [`PrimeField`], always held in canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl PrimeField {
    /// Creates a field over `modulus`. The modulus is expected to be prime;
    /// only the cheap checks (odd, greater than 2) are performed here.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(3u8) || modulus.is_even() {
            return Err(ShamirError::InvalidModulus);
        }
        Ok(Self::from_modulus(modulus))
    }

    /// The process-wide field over `2^256 - 189`.
    pub fn default_field() -> &'static PrimeField {
        &DEFAULT_FIELD
    }

    fn from_modulus(modulus: BigUint) -> Self {
        let byte_len = modulus.bits().div_ceil(8) as usize;
        let signed_modulus = BigInt::from(modulus.clone());
        Self { modulus, signed_modulus, byte_len }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Maps a non-negative integer into the field.
    pub fn element(&self, value: &BigUint) -> FieldElement {
        FieldElement(value % &self.modulus)
    }

    pub fn element_u64(&self, value: u64) -> FieldElement {
        self.element(&BigUint::from(value))
    }

    /// Maps an integer of either sign into the field as `((a % p) + p) % p`.
    /// `%` truncates toward zero, so a negative `a` leaves a negative
    /// remainder that the second reduction lifts back into range.
    pub fn reduce(&self, a: &BigInt) -> FieldElement {
        let m = &self.signed_modulus;
        let canonical: BigInt = ((a % m) + m) % m;
        FieldElement(canonical.into_parts().1)
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 + &b.0) % &self.modulus)
    }

    // Operands may come from another field, so reduce them before
    // subtracting from the modulus.
    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let b = &b.0 % &self.modulus;
        FieldElement((&a.0 + &self.modulus - b) % &self.modulus)
    }

    pub fn neg(&self, a: &FieldElement) -> FieldElement {
        let a = &a.0 % &self.modulus;
        if a.is_zero() {
            self.zero()
        } else {
            FieldElement(&self.modulus - a)
        }
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 * &b.0) % &self.modulus)
    }

    /// Multiplicative inverse by the extended Euclidean algorithm. Fails with
    /// [`ShamirError::NoInverse`] when `gcd(a, p) != 1`, which for a prime
    /// modulus means `a == 0`.
    pub fn inverse(&self, a: &FieldElement) -> Result<FieldElement> {
        let (gcd, x, _) = ext_gcd(&BigInt::from(a.0.clone()), &self.signed_modulus);
        if !gcd.is_one() {
            return Err(ShamirError::NoInverse);
        }
        Ok(self.reduce(&x))
    }

    /// Renders `a` as big-endian bytes, left-padded to the width of the modulus.
    pub fn to_bytes_be(&self, a: &FieldElement) -> Vec<u8> {
        let bytes = a.0.to_bytes_be();
        let mut result = vec![0u8; self.byte_len.saturating_sub(bytes.len())];
        result.extend_from_slice(&bytes);
        result
    }
}

impl Default for PrimeField {
    fn default() -> Self {
        Self::default_field().clone()
    }
}

/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
///
/// Iterative form of `ext_gcd(0, b) = (b, 0, 1)`,
/// `ext_gcd(a, b) = (g, y1 - floor(b/a)*x1, x1)` where
/// `(g, x1, y1) = ext_gcd(b mod a, a)`.
pub fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

impl FieldElement {
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
