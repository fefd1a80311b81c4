// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, Axis};

use crate::error::{MiError, Result};
use crate::estimators::approaches::binning::Discretization;
use crate::estimators::approaches::discrete::discrete_utils::BinCounts;

/// Joint count table of two discretised variables.
///
/// Rows index the bins of the first variable, columns those of the second.
/// All counts are non-negative and sum to the shared sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct JointHistogram {
    counts: Array2<usize>,
    n: usize,
}

impl JointHistogram {
    /// Tabulate two discretised variables in a single pass.
    pub fn from_bins(x: &Discretization, y: &Discretization) -> Result<Self> {
        Self::from_indices(x.indices(), y.indices(), x.bins(), y.bins())
    }

    /// Tabulate raw bin indices. Every index must be below its bin count.
    pub fn from_indices(x: &[usize], y: &[usize], bins_x: usize, bins_y: usize) -> Result<Self> {
        if x.len() != y.len() {
            return Err(MiError::DimensionMismatch {
                expected: x.len(),
                found: y.len(),
            });
        }
        if bins_x == 0 || bins_y == 0 {
            return Err(MiError::InvalidConfiguration(
                "bin count must be at least 1".to_string(),
            ));
        }
        let mut counts = Array2::<usize>::zeros((bins_x, bins_y));
        for (&i, &j) in x.iter().zip(y.iter()) {
            if i >= bins_x || j >= bins_y {
                return Err(MiError::InvalidInput(format!(
                    "bin index ({i}, {j}) outside a {bins_x}x{bins_y} table"
                )));
            }
            counts[[i, j]] += 1;
        }
        Ok(Self { counts, n: x.len() })
    }

    pub fn counts(&self) -> &Array2<usize> {
        &self.counts
    }

    /// Number of paired samples tabulated.
    pub fn total(&self) -> usize {
        self.n
    }

    /// `(B_x, B_y)`
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Cells with a non-zero count.
    pub fn occupied_cells(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Marginal counts of the first variable (row sums).
    pub fn row_marginal(&self) -> BinCounts {
        BinCounts::from_counts(self.counts.sum_axis(Axis(1)).to_vec())
    }

    /// Marginal counts of the second variable (column sums).
    pub fn col_marginal(&self) -> BinCounts {
        BinCounts::from_counts(self.counts.sum_axis(Axis(0)).to_vec())
    }

    /// Every cell of the table as one flat histogram over `B_x * B_y` bins.
    pub fn flattened(&self) -> BinCounts {
        BinCounts::from_counts(self.counts.iter().copied().collect())
    }
}
