// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::discrete::discrete_utils::{BinCounts, plugin_entropy};
use crate::estimators::traits::{FromCounts, GlobalValue};

/// Shrinkage (James–Stein) entropy estimator for binned data (natural log base).
///
/// Forms a convex combination between the empirical distribution and the uniform target
/// over **all** bins of the histogram (empty ones included) with a data-driven shrinkage
/// intensity $λ ∈ \[0,1\]$. This reduces variance and bias in undersampled regimes.
pub struct ShrinkEntropy {
    counts: BinCounts,
}

impl ShrinkEntropy {
    /// Shrinkage intensity λ = (1 - Σ u²) / ((N - 1) Σ (t - u)²), clipped to [0, 1].
    ///
    /// A zero denominator (N ≤ 1 or data already uniform) gives λ = 0.
    pub fn lambda(&self) -> f64 {
        let n = self.counts.n;
        let b = self.counts.bins() as f64;
        if n <= 1 || b == 0.0 {
            return 0.0;
        }
        let t = 1.0 / b;
        let mut sum_sq = 0.0_f64;
        let mut msp = 0.0_f64;
        for u in self.counts.probabilities() {
            sum_sq += u * u;
            msp += (t - u) * (t - u);
        }
        if msp == 0.0 {
            return 0.0;
        }
        let l = (1.0 - sum_sq) / ((n - 1) as f64 * msp);
        l.clamp(0.0, 1.0)
    }

    fn shrink_probs(&self) -> Vec<f64> {
        let lambda = self.lambda();
        let t = 1.0 / self.counts.bins() as f64;
        self.counts
            .probabilities()
            .into_iter()
            .map(|u| lambda * t + (1.0 - lambda) * u)
            .collect()
    }
}

impl FromCounts for ShrinkEntropy {
    fn from_counts(counts: BinCounts) -> Self {
        Self { counts }
    }
}

impl GlobalValue for ShrinkEntropy {
    fn global_value(&self) -> f64 {
        if self.counts.bins() == 0 || self.counts.n == 0 {
            return 0.0;
        }
        plugin_entropy(self.shrink_probs())
    }
}
