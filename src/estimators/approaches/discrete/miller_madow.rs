use crate::estimators::approaches::discrete::discrete_utils::{BinCounts, plugin_entropy};
use crate::estimators::traits::{FromCounts, GlobalValue};

/// Miller–Madow entropy estimator for binned data (natural log base).
///
/// Adds the small-sample bias correction (K-1)/(2N) to the MLE (Shannon) estimate,
/// where K counts the occupied bins only.
/// Useful when K is moderate relative to N and a simple analytical correction suffices.
///
/// Used on both marginals and the joint table, the corrections combine into
/// (K_x + K_y - K_xy - 1)/(2N) on top of the plug-in mutual information.
pub struct MillerMadowEntropy {
    counts: BinCounts,
}

impl MillerMadowEntropy {
    #[inline]
    fn correction(&self) -> f64 {
        if self.counts.n == 0 {
            return 0.0;
        }
        // (K - 1) / (2N)
        (self.counts.k.saturating_sub(1) as f64) / (2.0 * self.counts.n as f64)
    }
}

impl FromCounts for MillerMadowEntropy {
    fn from_counts(counts: BinCounts) -> Self {
        Self { counts }
    }
}

impl GlobalValue for MillerMadowEntropy {
    fn global_value(&self) -> f64 {
        // H_MM = H_MLE + (K-1)/(2N)
        plugin_entropy(self.counts.probabilities()) + self.correction()
    }
}
