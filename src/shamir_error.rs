use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("Base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },
    #[error("Invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit { digit: char, position: usize, base: u32 },
    #[error("Share value is empty")]
    EmptyValue,
    #[error("Modular inverse does not exist")]
    NoInverse,
    #[error("Not enough shares: need {required}, got {available}")]
    InsufficientShares { required: usize, available: usize },
    #[error("Invalid threshold")]
    InvalidThreshold,
    #[error("Invalid share index {0:?}")]
    InvalidShareIndex(String),
    #[error("Share {index}: {source}")]
    InvalidShare {
        index: u64,
        #[source]
        source: Box<ShamirError>,
    },
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Share {index} does not lie on the interpolated polynomial")]
    InconsistentShare { index: u64 },
    #[error("Field modulus must be an odd integer greater than 2")]
    InvalidModulus,
}

pub type Result<T> = std::result::Result<T, ShamirError>;
