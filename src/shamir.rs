use tracing::debug;

use crate::{
    ShamirError,
    shamir_error::Result,
    field::{FieldElement, PrimeField},
    interpolate::{interpolate_at, interpolate_at_zero, Point},
    share::{Share, ShareSet},
};

/// Reconstructs the secret of a [`ShareSet`].
///
/// The first `k` shares, in input order, define the polynomial. Any further
/// shares are ignored unless [`Reconstructor::verify_consistency`] is enabled,
/// in which case each of them must lie on that same polynomial.
#[derive(Clone, Debug, Default)]
pub struct Reconstructor {
    field: PrimeField,
    verify: bool,
}

impl Reconstructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: PrimeField) -> Self {
        self.field = field;
        self
    }

    pub fn verify_consistency(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn reconstruct(&self, share_set: &ShareSet) -> Result<FieldElement> {
        let threshold = share_set.threshold();
        let points = share_set
            .shares()
            .iter()
            .map(|share| share.decode(&self.field))
            .collect::<Result<Vec<_>>>()?;

        if points.len() < threshold {
            return Err(ShamirError::InsufficientShares {
                required: threshold,
                available: points.len(),
            });
        }

        let (selected, remaining) = points.split_at(threshold);
        debug!(threshold, available = points.len(), "interpolating secret");
        let secret = interpolate_at_zero(&self.field, selected)?;

        if self.verify {
            self.check_remaining(selected, &share_set.shares()[threshold..], remaining)?;
        } else if !remaining.is_empty() {
            debug!(ignored = remaining.len(), "shares beyond the threshold were not checked");
        }

        Ok(secret)
    }

    pub fn reconstruct_decimal(&self, share_set: &ShareSet) -> Result<String> {
        Ok(self.reconstruct(share_set)?.to_decimal())
    }

    fn check_remaining(&self, selected: &[Point], shares: &[Share], points: &[Point]) -> Result<()> {
        for (share, point) in shares.iter().zip(points) {
            let expected = interpolate_at(&self.field, selected, &point.x)?;
            if expected != point.y {
                return Err(ShamirError::InconsistentShare { index: share.index() });
            }
        }
        debug!(checked = points.len(), "remaining shares are consistent");
        Ok(())
    }
}

/// Recovers the secret over the default 256-bit field and renders it in
/// decimal.
pub fn recover_secret(share_set: &ShareSet) -> Result<String> {
    Reconstructor::new().reconstruct_decimal(share_set)
}

/// Parses `json` (see [`ShareSet::from_json`]) and recovers its secret.
pub fn recover_secret_from_json(json: &str) -> Result<String> {
    recover_secret(&ShareSet::from_json(json)?)
}
