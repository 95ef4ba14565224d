/// Smallest radix accepted for an encoded share value.
pub const SHAMIR_MIN_BASE: u32 = 2;
/// Largest radix accepted for an encoded share value (`0-9` then `a-z`).
pub const SHAMIR_MAX_BASE: u32 = 36;

/// The default field modulus is `2^SHAMIR_PRIME_BITS - SHAMIR_PRIME_OFFSET`.
pub const SHAMIR_PRIME_BITS: usize = 256;
pub const SHAMIR_PRIME_OFFSET: u32 = 189;
pub const SHAMIR_PRIME_DECIMAL: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639747";

/// Name of the top-level input entry holding `n` and `k`.
pub const SHAMIR_KEYS_ENTRY: &str = "keys";
/// Top-level share count entry. The input keeps it inside `keys`, but a
/// stray copy at the top level is ignored.
pub const SHAMIR_COUNT_ENTRY: &str = "n";
