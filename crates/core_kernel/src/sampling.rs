//! Weighted random selection from a discrete set
//!
//! Weights are relative: they need not sum to one. A draw is taken uniformly
//! from `[0, total_weight)` and the first value whose cumulative weight
//! exceeds it wins. If rounding leaves the draw unmatched the last value is
//! returned.
//!
//! A table may list more values than weights. Trailing unweighted values are
//! only reachable through that fallback, which lets a table such as
//! `[1, 2, 3, 5, 8, 15, 30]` with six weights keep its exact shape.

use thiserror::Error;

use crate::ports::FakeDataProvider;

/// Errors raised when a weighted table is malformed
#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("Cannot sample from an empty set of values")]
    EmptyValues,

    #[error("At least one weight is required")]
    EmptyWeights,

    #[error("{weights} weights supplied for only {values} values")]
    TooManyWeights { values: usize, weights: usize },

    #[error("Weight at index {index} must be finite and positive, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },
}

/// A validated table of values and relative weights
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSampler<T> {
    values: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Clone> WeightedSampler<T> {
    pub fn new(values: impl Into<Vec<T>>, weights: &[f64]) -> Result<Self, SamplingError> {
        let values = values.into();
        if values.is_empty() {
            return Err(SamplingError::EmptyValues);
        }
        if weights.is_empty() {
            return Err(SamplingError::EmptyWeights);
        }
        if weights.len() > values.len() {
            return Err(SamplingError::TooManyWeights {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(SamplingError::InvalidWeight { index, weight });
        }

        let cumulative = weights
            .iter()
            .scan(0.0, |sum, w| {
                *sum += w;
                Some(*sum)
            })
            .collect();

        Ok(Self { values, cumulative })
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Picks one value
    pub fn sample<P: FakeDataProvider + ?Sized>(&self, provider: &mut P) -> T {
        let draw = provider.unit_interval() * self.total_weight();
        self.select(draw).clone()
    }

    /// Maps a draw in `[0, total_weight)` to its bucket
    pub fn select(&self, draw: f64) -> &T {
        self.cumulative
            .iter()
            .position(|&upper| draw < upper)
            .and_then(|i| self.values.get(i))
            .unwrap_or_else(|| self.fallback())
    }

    fn fallback(&self) -> &T {
        // new() rejects empty value lists
        &self.values[self.values.len() - 1]
    }
}

/// One-shot weighted selection
pub fn weighted_sample<T: Clone, P: FakeDataProvider + ?Sized>(
    values: &[T],
    weights: &[f64],
    provider: &mut P,
) -> Result<T, SamplingError> {
    Ok(WeightedSampler::new(values.to_vec(), weights)?.sample(provider))
}
