use crate::{
    ShamirError,
    shamir_error::Result,
    field::{FieldElement, PrimeField},
};

/// A point `(x, y)` on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Point {
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }
}

/// Calculate the lagrange basis coefficient for the point at `j` evaluated
/// at `x`:
///
/// ```text
///                ---     (x - x_i)
///   basis_j  =   | |   -------------
///              i != j   (x_j - x_i)
/// ```
///
/// The numerator and denominator are accumulated separately so a single
/// inversion is needed per basis. A repeated abscissa makes the denominator
/// zero, which `inverse` rejects with `NoInverse`.
fn lagrange_basis(field: &PrimeField, points: &[Point], j: usize, x: &FieldElement) -> Result<FieldElement> {
    let xj = &points[j].x;
    let mut numerator = field.one();
    let mut denominator = field.one();

    for (i, point) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        numerator = field.mul(&numerator, &field.sub(x, &point.x));
        denominator = field.mul(&denominator, &field.sub(xj, &point.x));
    }

    Ok(field.mul(&numerator, &field.inverse(&denominator)?))
}

/// Evaluates the unique polynomial of degree `points.len() - 1` passing
/// through `points` at `x`.
pub fn interpolate_at(field: &PrimeField, points: &[Point], x: &FieldElement) -> Result<FieldElement> {
    if points.is_empty() {
        return Err(ShamirError::InsufficientShares { required: 1, available: 0 });
    }

    let mut result = field.zero();
    for (j, point) in points.iter().enumerate() {
        let basis = lagrange_basis(field, points, j, x)?;
        result = field.add(&result, &field.mul(&point.y, &basis));
    }

    Ok(result)
}

/// Evaluates the interpolating polynomial at `x = 0`, i.e. recovers its
/// constant term.
pub fn interpolate_at_zero(field: &PrimeField, points: &[Point]) -> Result<FieldElement> {
    interpolate_at(field, points, &field.zero())
}
