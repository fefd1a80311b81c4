// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{MiError, Result};

/// Continuous input table, stored **variables × samples**: row `i` holds every observation
/// of variable `i`, so all variables share the column count N_s.
///
/// Expression matrices usually come the other way round (one row per sample, one column per
/// gene); [`SampleMatrix::from_samples_by_variables`] accepts that layout and transposes it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    data: Array2<f64>,
}

impl SampleMatrix {
    /// Wrap a variables × samples array. Every value must be finite and there must be samples.
    pub fn new(data: Array2<f64>) -> Result<Self> {
        if data.ncols() == 0 {
            return Err(MiError::InvalidInput("variables have no samples".to_string()));
        }
        if let Some(((var, sample), v)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(MiError::InvalidInput(format!(
                "non-finite value {v} for variable {var} at sample {sample}"
            )));
        }
        Ok(Self { data })
    }

    /// Build from a samples × variables array (one row per sample).
    pub fn from_samples_by_variables(data: Array2<f64>) -> Result<Self> {
        Self::new(data.reversed_axes().as_standard_layout().into_owned())
    }

    /// Build from one vector per variable. Fails with `DimensionMismatch` on ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_samples = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != n_samples) {
            return Err(MiError::DimensionMismatch {
                expected: n_samples,
                found: bad.len(),
            });
        }
        let n_vars = rows.len();
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n_vars, n_samples), flat)
            .map_err(|e| MiError::InvalidInput(e.to_string()))?;
        Self::new(data)
    }

    pub fn n_variables(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_samples(&self) -> usize {
        self.data.ncols()
    }

    pub fn variable(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    pub fn variables(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.data.axis_iter(Axis(0))
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}
