// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::estimators::mutual_information::{LogBase, MiEstimator};

/// Number of unordered variable pairs `i < j` among `n` variables.
#[inline]
pub fn n_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Position of pair `(i, j)`, `i < j`, in the row-major strict upper triangle.
#[inline]
pub fn pair_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n);
    // pairs in rows 0..i, then the offset inside row i
    i * n - i * (i + 1) / 2 + (j - i - 1)
}

/// All pairs `(i, j)` with `i < j`, in row-major order.
pub fn upper_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n_pairs(n));
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Symmetric N×N mutual information matrix.
///
/// Off-diagonal cells hold MI(i, j) = MI(j, i); the diagonal holds the estimator's entropy
/// of each variable, i.e. MI(i, i) = H(i). Values are in the recorded log base.
#[derive(Debug, Clone, PartialEq)]
pub struct MiMatrix {
    values: Array2<f64>,
    estimator: MiEstimator,
    log_base: LogBase,
}

impl MiMatrix {
    /// Assemble from per-variable entropies and the strict upper triangle (row-major).
    pub(crate) fn from_parts(
        diagonal: &[f64],
        upper: &[f64],
        estimator: MiEstimator,
        log_base: LogBase,
    ) -> Self {
        let n = diagonal.len();
        debug_assert_eq!(upper.len(), n_pairs(n));
        let mut values = Array2::<f64>::zeros((n, n));
        for (i, &h) in diagonal.iter().enumerate() {
            values[[i, i]] = h;
        }
        for ((i, j), &mi) in upper_pairs(n).into_iter().zip(upper.iter()) {
            values[[i, j]] = mi;
            values[[j, i]] = mi;
        }
        Self {
            values,
            estimator,
            log_base,
        }
    }

    pub fn n_variables(&self) -> usize {
        self.values.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.values
    }

    /// Position of the pair `{i, j}` in [`upper_triangle`](Self::upper_triangle), in either
    /// order. `None` on the diagonal or out of range.
    pub fn pair_index(&self, i: usize, j: usize) -> Option<usize> {
        let n = self.n_variables();
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        if lo == hi || hi >= n {
            return None;
        }
        Some(pair_index(n, lo, hi))
    }

    /// Compressed form: the N(N-1)/2 cells above the diagonal, row-major.
    pub fn upper_triangle(&self) -> Vec<f64> {
        upper_pairs(self.n_variables())
            .into_iter()
            .map(|(i, j)| self.values[[i, j]])
            .collect()
    }

    pub fn estimator(&self) -> MiEstimator {
        self.estimator
    }

    pub fn log_base(&self) -> LogBase {
        self.log_base
    }
}

/// Result of a batch run in partial-results mode.
///
/// Cells whose pair was not reached before cancellation are `NaN` (on both sides of the
/// diagonal). The diagonal is always filled.
#[derive(Debug, Clone)]
pub struct PartialMiMatrix {
    values: Array2<f64>,
    completed_pairs: usize,
    total_pairs: usize,
}

impl PartialMiMatrix {
    pub(crate) fn from_parts(diagonal: &[f64], upper: &[Option<f64>]) -> Self {
        let n = diagonal.len();
        let mut values = Array2::<f64>::from_elem((n, n), f64::NAN);
        for (i, &h) in diagonal.iter().enumerate() {
            values[[i, i]] = h;
        }
        let mut completed_pairs = 0;
        for ((i, j), mi) in upper_pairs(n).into_iter().zip(upper.iter()) {
            if let Some(mi) = *mi {
                values[[i, j]] = mi;
                values[[j, i]] = mi;
                completed_pairs += 1;
            }
        }
        Self {
            values,
            completed_pairs,
            total_pairs: upper.len(),
        }
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn completed_pairs(&self) -> usize {
        self.completed_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn is_complete(&self) -> bool {
        self.completed_pairs == self.total_pairs
    }
}
