//! Run-length encoded sequences.

use crate::math::Array1;

/// Parallel `values` / `counts` arrays describing consecutive runs.
///
/// `values[k]` is the value of the k-th run in encounter order and
/// `counts[k]` its length. A value that reappears after a different one
/// starts a new run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunLengthEncoding<T> {
    pub values: Array1<T>,
    pub counts: Array1<usize>,
}

impl<T> RunLengthEncoding<T> {
    pub(crate) fn from_runs(values: Vec<T>, counts: Vec<usize>) -> Self {
        debug_assert_eq!(values.len(), counts.len());
        Self {
            values: Array1::from_vec(values),
            counts: Array1::from_vec(counts),
        }
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Length of the sequence that was encoded.
    pub fn total_len(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn runs(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.values.iter().zip(self.counts.iter().copied())
    }
}

impl<T: Clone> RunLengthEncoding<T> {
    /// Expand the runs back into the original sequence.
    pub fn decode(&self) -> Array1<T> {
        let mut out = Vec::with_capacity(self.total_len());
        for (value, count) in self.runs() {
            out.extend(std::iter::repeat(value.clone()).take(count));
        }
        Array1::from_vec(out)
    }
}
