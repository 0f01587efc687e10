use std::ops::Index;

use thiserror::Error;

/// Two vectors that should have matched in length did not.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected {expected} components, found {actual}")]
pub struct DimensionMismatch {
    /// The length that was required.
    pub expected: usize,

    /// The length that was found.
    pub actual: usize,
}

impl DimensionMismatch {
    /// Returns `Ok(())` if `actual` equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if the lengths differ.
    pub fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

/// The values of every dynamical variable at a single instant.
///
/// A state vector is an ordered, fixed-length sequence of `f64`, one entry per
/// variable. Operations that combine two vectors check that their lengths
/// agree and never modify either operand; they return a new vector instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StateVector(Vec<f64>);

impl StateVector {
    /// Creates a state vector from its components.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the component at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Consumes the vector and returns its components.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|x| x.is_finite())
    }

    /// Returns a copy with every component multiplied by `factor`.
    ///
    /// Each component is computed as `factor * x`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.iter().map(|x| factor * x).collect())
    }

    /// Returns `self + scale * other`, computed componentwise.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionMismatch`] if `other` has a different length.
    pub fn offset(&self, other: &[f64], scale: f64) -> Result<Self, DimensionMismatch> {
        DimensionMismatch::check(self.len(), other.len())?;

        Ok(Self(
            self.0
                .iter()
                .zip(other)
                .map(|(x, dx)| x + scale * dx)
                .collect(),
        ))
    }
}

impl Index<usize> for StateVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<Vec<f64>> for StateVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for StateVector {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for StateVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StateVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_adds_scaled_components() {
        let state = StateVector::from([1.0, 2.0, 3.0]);

        let next = state.offset(&[2.0, 4.0, 6.0], 0.5).expect("same length");

        assert_eq!(next, StateVector::from([2.0, 4.0, 6.0]));
    }

    #[test]
    fn offset_leaves_operand_untouched() {
        let state = StateVector::from([1.0, 1.0]);

        let _ = state.offset(&[5.0, 5.0], 1.0).expect("same length");

        assert_eq!(state.as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn offset_rejects_length_mismatch() {
        let state = StateVector::from([1.0, 2.0]);

        let err = state.offset(&[1.0, 2.0, 3.0], 1.0).unwrap_err();

        assert_eq!(
            err,
            DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn scaled_multiplies_every_component() {
        let state = StateVector::from([1.0, -2.0]);
        assert_eq!(state.scaled(0.1), StateVector::from([0.1, -0.2]));
    }

    #[test]
    fn indexing_and_get_agree() {
        let state: StateVector = [3.0, 4.0].into_iter().collect();

        assert_eq!(state[1], 4.0);
        assert_eq!(state.get(1), Some(4.0));
        assert_eq!(state.get(2), None);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(StateVector::from([0.0, 1.0]).is_finite());
        assert!(!StateVector::from([0.0, f64::NAN]).is_finite());
        assert!(!StateVector::from([f64::INFINITY]).is_finite());
    }
}
