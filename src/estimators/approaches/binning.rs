// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Discretisation of continuous variables into histogram bins.
//!
//! Boundary convention used throughout: a value lying exactly on an interior edge `e_k`
//! belongs to the lower-adjacent bin `k-1`. Bin 0 is closed on both sides, `[e_0, e_1]`,
//! every later bin is half-open on the left, `(e_k, e_{k+1}]`.

use log::warn;
use ndarray::ArrayView1;

use crate::error::{MiError, Result};
use crate::estimators::approaches::discrete::discrete_utils::{BinCounts, compact_codes};

/// How a variable's observed range is partitioned into bins.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BinningStrategy {
    /// `bins` intervals of identical width between the minimum and maximum.
    #[default]
    EqualWidth,
    /// Quantile edges so that each bin holds roughly `N/bins` samples.
    EqualFrequency,
    /// Caller-supplied boundaries `e_0 <= ... <= e_B`, shared by every variable.
    Edges(Vec<f64>),
}

/// Ordered bin boundaries `e_0 <= e_1 <= ... <= e_B` for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    /// Equal-width edges over `[min, max]`. A constant variable collapses to a single bin.
    pub fn equal_width(values: ArrayView1<'_, f64>, bins: usize) -> Result<Self> {
        check_bins(bins)?;
        let (min, max) = finite_range(values)?;
        if min == max {
            return Ok(Self { edges: vec![min, max] });
        }
        let width = (max - min) / bins as f64;
        let mut edges: Vec<f64> = if width.is_finite() {
            (0..bins).map(|k| min + k as f64 * width).collect()
        } else {
            // range wider than f64::MAX: interpolate without forming max - min
            (0..bins)
                .map(|k| {
                    let t = k as f64 / bins as f64;
                    min * (1.0 - t) + max * t
                })
                .collect()
        };
        // Pin the last edge to the maximum so rounding can never push it out of range.
        edges.push(max);
        Ok(Self { edges })
    }

    /// Quantile edges. Interior edge `k` is the sample of rank `ceil(k*N/bins)`; repeated
    /// edges caused by ties are collapsed, so fewer than `bins` bins may come out.
    ///
    /// When the lowest quantiles equal the minimum, `e_0 == e_1` is kept: bin 0 then holds
    /// exactly the tied minimum (e.g. dropout zeros) and is not merged into the next bin.
    pub fn equal_frequency(values: ArrayView1<'_, f64>, bins: usize) -> Result<Self> {
        check_bins(bins)?;
        let (min, max) = finite_range(values)?;
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        let n = sorted.len();

        let mut upper = Vec::with_capacity(bins);
        for k in 1..bins {
            let rank = (k * n).div_ceil(bins);
            upper.push(sorted[rank.max(1) - 1]);
        }
        upper.push(max);
        // only e_1..e_B are collapsed, e_0 stays in front
        upper.dedup();
        let mut edges = Vec::with_capacity(upper.len() + 1);
        edges.push(min);
        edges.extend(upper);
        if edges.len() - 1 < bins && min != max {
            warn!(
                "equal-frequency binning produced {} of {} requested bins because of ties",
                edges.len() - 1,
                bins
            );
        }
        Ok(Self { edges })
    }

    /// Caller-supplied boundaries; at least two finite, non-decreasing values.
    pub fn from_edges(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(MiError::InvalidConfiguration(format!(
                "bin edges need at least two boundaries, got {}",
                edges.len()
            )));
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(MiError::InvalidConfiguration(
                "bin edges must be finite".to_string(),
            ));
        }
        if edges.windows(2).any(|w| w[1] < w[0]) {
            return Err(MiError::InvalidConfiguration(
                "bin edges must be non-decreasing".to_string(),
            ));
        }
        Ok(Self { edges })
    }

    /// Number of bins B.
    #[inline]
    pub fn bins(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// True when all boundaries coincide (zero-width range).
    pub fn is_degenerate(&self) -> bool {
        self.edges[0] == self.edges[self.edges.len() - 1]
    }

    /// Bin of `value` in `[0, B)`. Values below `e_0` land in bin 0, values above `e_B` in bin B-1.
    #[inline]
    pub fn bin_index(&self, value: f64) -> usize {
        let b = self.bins();
        if b <= 1 {
            return 0;
        }
        // Interior edges strictly below the value; equality keeps the value in the lower bin.
        let interior = &self.edges[1..b];
        interior.partition_point(|&e| e < value).min(b - 1)
    }
}

/// One variable after discretisation: its bin count and the bin index of every sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Discretization {
    edges: Option<BinEdges>,
    indices: Vec<usize>,
    bins: usize,
    degenerate: bool,
}

impl Discretization {
    /// Bin a continuous variable with the given strategy.
    ///
    /// `bins` is ignored for [`BinningStrategy::Edges`], which carries its own bin count.
    pub fn from_values(
        values: ArrayView1<'_, f64>,
        strategy: &BinningStrategy,
        bins: usize,
    ) -> Result<Self> {
        let mut edges = match strategy {
            BinningStrategy::EqualWidth => BinEdges::equal_width(values, bins)?,
            BinningStrategy::EqualFrequency => BinEdges::equal_frequency(values, bins)?,
            BinningStrategy::Edges(edges) => {
                finite_range(values)?;
                BinEdges::from_edges(edges.clone())?
            }
        };
        // finite_range above guarantees at least one sample
        let constant = values.iter().all(|&v| v == values[0]);
        let degenerate = constant || edges.is_degenerate();
        if degenerate && edges.bins() > 1 {
            // supplied edges: collapse to one bin so all mass sits in bin 0
            let at = if constant { values[0] } else { edges.edges[0] };
            edges = BinEdges {
                edges: vec![at, at],
            };
        }
        let indices = values.iter().map(|&v| edges.bin_index(v)).collect();
        let bins = edges.bins();
        Ok(Self {
            edges: Some(edges),
            indices,
            bins,
            degenerate,
        })
    }

    /// Adopt pre-discretised integer labels. Labels are compacted to `0..K` in ascending order.
    pub fn from_codes(codes: ArrayView1<'_, i32>) -> Result<Self> {
        if codes.is_empty() {
            return Err(MiError::InvalidInput("variable has no samples".to_string()));
        }
        let (indices, bins) = compact_codes(codes);
        Ok(Self {
            edges: None,
            indices,
            bins,
            degenerate: bins == 1,
        })
    }

    /// Edges used for binning; `None` for pre-discretised input.
    pub fn edges(&self) -> Option<&BinEdges> {
        self.edges.as_ref()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn n_samples(&self) -> usize {
        self.indices.len()
    }

    /// Zero-variance variable: every sample sits in one bin.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Marginal histogram of this variable.
    pub fn counts(&self) -> BinCounts {
        BinCounts::from_indices(&self.indices, self.bins)
    }
}

fn check_bins(bins: usize) -> Result<()> {
    if bins == 0 {
        return Err(MiError::InvalidConfiguration(
            "bin count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn finite_range(values: ArrayView1<'_, f64>) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(MiError::InvalidInput("variable has no samples".to_string()));
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values.iter() {
        if !v.is_finite() {
            return Err(MiError::InvalidInput(format!("non-finite sample value {v}")));
        }
        min = min.min(v);
        max = max.max(v);
    }
    Ok((min, max))
}
