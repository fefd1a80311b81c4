use crate::estimators::approaches::discrete::discrete_utils::BinCounts;
use crate::estimators::traits::{FromCounts, GlobalValue};

/// Chao–Shen coverage-adjusted entropy estimator for binned data (natural log base).
///
/// Adjusts empirical probabilities by sample coverage C = 1 - f1/N and compensates for
/// unseen mass via the inclusion probability λ = 1 - (1 - C p)^N in the denominator.
/// Recommended for undersampled data with many singletons, which is the usual situation
/// for joint tables of expression data with few samples.
pub struct ChaoShenEntropy {
    counts: BinCounts,
}

impl FromCounts for ChaoShenEntropy {
    fn from_counts(counts: BinCounts) -> Self {
        Self { counts }
    }
}

impl GlobalValue for ChaoShenEntropy {
    fn global_value(&self) -> f64 {
        let n = self.counts.n as f64;
        if n == 0.0 {
            return 0.0;
        }

        let mut f1 = self.counts.singletons();
        if f1 == self.counts.n && f1 > 0 {
            // avoid C=0
            f1 -= 1;
        }

        let c_cov = 1.0 - (f1 as f64) / n; // coverage C

        // - sum( pa * ln(pa) / la ) where pa = C * p_ml, la = 1 - (1 - pa)^N
        let mut h = 0.0_f64;
        for p_ml in self.counts.probabilities() {
            let pa = c_cov * p_ml;
            if pa <= 0.0 {
                continue;
            }
            let la = 1.0 - (1.0 - pa).powf(n);
            if la <= 0.0 {
                continue;
            }
            h -= pa * pa.ln() / la;
        }
        h
    }
}
