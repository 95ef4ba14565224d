use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    ShamirError,
    shamir_error::Result,
    constants::{SHAMIR_COUNT_ENTRY, SHAMIR_KEYS_ENTRY},
    decode::{decode, parse_base, validate_base},
    field::PrimeField,
    interpolate::Point,
};

/// One encoded share: the polynomial evaluated at `index`, written in radix
/// `base`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    index: u64,
    base: u32,
    value: String,
}

impl Share {
    pub fn new(index: u64, base: u32, value: impl Into<String>) -> Result<Self> {
        // x = 0 is where the secret lives
        if index == 0 {
            return Err(ShamirError::InvalidShareIndex(index.to_string()));
        }
        validate_base(base)?;
        Ok(Self { index, base, value: value.into() })
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decodes the share into a point of `field`. Decoding failures are
    /// reported with the share's index.
    pub fn decode(&self, field: &PrimeField) -> Result<Point> {
        let y = decode(&self.value, self.base).map_err(|e| ShamirError::InvalidShare {
            index: self.index,
            source: Box::new(e),
        })?;
        trace!(index = self.index, base = self.base, "decoded share");
        Ok(Point::new(field.element_u64(self.index), field.element(&y)))
    }
}

/// The shares supplied for one reconstruction, in input order, together with
/// the threshold `k` and the informational share count `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    total: Option<usize>,
    threshold: usize,
    shares: Vec<Share>,
}

#[derive(Deserialize)]
struct Keys {
    n: Option<usize>,
    k: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(u32),
}

#[derive(Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

fn parse_index(key: &str) -> Result<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShamirError::InvalidShareIndex(key.to_string()));
    }
    key.parse::<u64>()
        .map_err(|_| ShamirError::InvalidShareIndex(key.to_string()))
}

fn malformed(context: &str, e: serde_json::Error) -> ShamirError {
    ShamirError::MalformedInput(format!("{}: {}", context, e))
}

impl ShareSet {
    pub fn new(total: Option<usize>, threshold: usize, shares: Vec<Share>) -> Result<Self> {
        if threshold < 1 {
            return Err(ShamirError::InvalidThreshold);
        }
        Ok(Self { total, threshold, shares })
    }

    /// Parses the input document
    ///
    /// ```json
    /// {
    ///   "keys": { "n": 4, "k": 3 },
    ///   "1": { "base": "10", "value": "4" },
    ///   "2": { "base": "2", "value": "111" }
    /// }
    /// ```
    ///
    /// Shares keep the order in which they appear in the document.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Map<String, Value> =
            serde_json::from_str(json).map_err(|e| malformed("input", e))?;

        let keys = entries
            .get(SHAMIR_KEYS_ENTRY)
            .ok_or_else(|| ShamirError::MalformedInput("missing \"keys\" entry".to_string()))?;
        let keys = Keys::deserialize(keys).map_err(|e| malformed("keys", e))?;

        let mut shares = Vec::with_capacity(entries.len().saturating_sub(1));
        for (key, entry) in &entries {
            if key == SHAMIR_KEYS_ENTRY || key == SHAMIR_COUNT_ENTRY {
                continue;
            }
            let index = parse_index(key)?;
            let raw = RawShare::deserialize(entry).map_err(|e| malformed(&format!("share {}", key), e))?;
            let base = match raw.base {
                RawBase::Text(text) => parse_base(&text),
                RawBase::Number(base) => validate_base(base).map(|_| base),
            }
            .map_err(|e| ShamirError::InvalidShare { index, source: Box::new(e) })?;
            shares.push(Share::new(index, base, raw.value)?);
        }

        Self::new(keys.n, keys.k, shares)
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn test_parse_scenario() {
        let set = ShareSet::from_json(SCENARIO).unwrap();
        assert_eq!(set.total(), Some(4));
        assert_eq!(set.threshold(), 3);
        let indexes: Vec<u64> = set.shares().iter().map(Share::index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 6]);
        assert_eq!(set.shares()[1].base(), 2);
        assert_eq!(set.shares()[1].value(), "111");
    }

    #[test]
    fn test_document_order_is_kept() {
        let json = r#"{
            "10": { "base": "10", "value": "1" },
            "keys": { "k": 2 },
            "2": { "base": "10", "value": "2" },
            "7": { "base": 16, "value": "ff" }
        }"#;
        let set = ShareSet::from_json(json).unwrap();
        assert_eq!(set.total(), None);
        let indexes: Vec<u64> = set.shares().iter().map(Share::index).collect();
        assert_eq!(indexes, vec![10, 2, 7]);
        assert_eq!(set.shares()[2].base(), 16);
    }

    #[test]
    fn test_top_level_count_is_ignored() {
        let json = r#"{
            "keys": { "k": 2 },
            "n": 4,
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" }
        }"#;
        let set = ShareSet::from_json(json).unwrap();
        assert_eq!(set.total(), None);
        let indexes: Vec<u64> = set.shares().iter().map(Share::index).collect();
        assert_eq!(indexes, vec![1, 2]);
    }

    #[test]
    fn test_decode_share() {
        let field = PrimeField::default_field();
        let share = Share::new(6, 4, "213").unwrap();
        let point = share.decode(field).unwrap();
        assert_eq!(point, Point::new(field.element_u64(6), field.element_u64(39)));
    }

    #[test]
    fn test_decode_share_reports_index() {
        let field = PrimeField::default_field();
        let share = Share::new(2, 2, "121").unwrap();
        assert_eq!(
            share.decode(field),
            Err(ShamirError::InvalidShare {
                index: 2,
                source: Box::new(ShamirError::InvalidDigit { digit: '2', position: 1, base: 2 }),
            })
        );
    }

    #[test]
    fn test_missing_keys() {
        let json = r#"{ "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(ShareSet::from_json(json), Err(ShamirError::MalformedInput(_))));

        let json = r#"{ "keys": { "n": 1 }, "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(ShareSet::from_json(json), Err(ShamirError::MalformedInput(_))));
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(ShareSet::from_json("[1, 2]"), Err(ShamirError::MalformedInput(_))));
        assert!(matches!(ShareSet::from_json("{"), Err(ShamirError::MalformedInput(_))));
    }

    #[test]
    fn test_zero_threshold() {
        let json = r#"{ "keys": { "n": 1, "k": 0 }, "1": { "base": "10", "value": "4" } }"#;
        assert_eq!(ShareSet::from_json(json), Err(ShamirError::InvalidThreshold));
    }

    #[test]
    fn test_bad_index() {
        let json = r#"{ "keys": { "k": 1 }, "one": { "base": "10", "value": "4" } }"#;
        assert_eq!(ShareSet::from_json(json), Err(ShamirError::InvalidShareIndex("one".to_string())));

        let json = r#"{ "keys": { "k": 1 }, "-1": { "base": "10", "value": "4" } }"#;
        assert_eq!(ShareSet::from_json(json), Err(ShamirError::InvalidShareIndex("-1".to_string())));

        let json = r#"{ "keys": { "k": 1 }, "0": { "base": "10", "value": "4" } }"#;
        assert_eq!(ShareSet::from_json(json), Err(ShamirError::InvalidShareIndex("0".to_string())));
    }

    #[test]
    fn test_bad_base() {
        let json = r#"{ "keys": { "k": 1 }, "3": { "base": "x", "value": "4" } }"#;
        assert!(matches!(
            ShareSet::from_json(json),
            Err(ShamirError::InvalidShare { index: 3, .. })
        ));

        let json = r#"{ "keys": { "k": 1 }, "3": { "base": "40", "value": "4" } }"#;
        assert_eq!(
            ShareSet::from_json(json),
            Err(ShamirError::InvalidShare { index: 3, source: Box::new(ShamirError::InvalidBase { base: 40 }) })
        );
    }

    #[test]
    fn test_missing_value() {
        let json = r#"{ "keys": { "k": 1 }, "3": { "base": "10" } }"#;
        assert!(matches!(ShareSet::from_json(json), Err(ShamirError::MalformedInput(_))));
    }
}
