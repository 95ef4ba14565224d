#![doc(html_root_url = "https://docs.rs/shamir-reconstruct/0.1.0")]

//! Reconstruction of Shamir-shared secrets over the prime field
//! `GF(2^256 - 189)`.
//!
//! Shares arrive as `(index, base, digits)` triples. Each value is decoded from
//! its radix, the first `k` points are interpolated, and the polynomial's
//! value at `x = 0` is returned in decimal.
//!
//! ```
//! let json = r#"{
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }"#;
//! assert_eq!(shamir_reconstruct::recover_secret_from_json(json).unwrap(), "3");
//! ```

mod constants;
pub use constants::{
    SHAMIR_MIN_BASE, SHAMIR_MAX_BASE,
    SHAMIR_PRIME_BITS, SHAMIR_PRIME_OFFSET, SHAMIR_PRIME_DECIMAL,
};

mod shamir_error;
pub use shamir_error::{ShamirError, Result};

mod decode;
pub use decode::{decode, parse_base};

mod field;
pub use field::{ext_gcd, FieldElement, PrimeField};

mod interpolate;
pub use interpolate::{interpolate_at, interpolate_at_zero, Point};

mod share;
pub use share::{Share, ShareSet};

mod shamir;
pub use shamir::{recover_secret, recover_secret_from_json, Reconstructor};
