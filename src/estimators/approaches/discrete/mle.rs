use crate::estimators::approaches::discrete::discrete_utils::{BinCounts, plugin_entropy};
use crate::estimators::approaches::discrete::joint::JointHistogram;
use crate::estimators::traits::{FromCounts, GlobalValue, MutualInformationEstimator};

/// Standard Shannon entropy estimator for binned data using maximum likelihood (natural log base).
///
/// This baseline estimator computes H = -Σ p_i ln p_i from empirical probabilities p_i = n_i/N.
/// Empty bins contribute nothing.
///
/// Suitable as a reference and for well-sampled regimes; for small N or many bins consider
/// the Miller–Madow correction or the coverage-based Chao–Shen estimator.
pub struct DiscreteEntropy {
    counts: BinCounts,
}

impl FromCounts for DiscreteEntropy {
    fn from_counts(counts: BinCounts) -> Self {
        Self { counts }
    }
}

impl GlobalValue for DiscreteEntropy {
    fn global_value(&self) -> f64 {
        plugin_entropy(self.counts.probabilities())
    }
}

/// Empirical (maximum likelihood) mutual information read straight off a joint table:
///
/// I(X;Y) = Σ p(i,j) ln( p(i,j) / (p(i) p(j)) ), summed over cells with p(i,j) > 0.
///
/// Algebraically identical to H(X) + H(Y) - H(X,Y) with plug-in entropies, but needs a single
/// pass over the occupied cells. Zero cells are skipped, so log(0) never appears.
pub struct EmpiricalMutualInformation<'a> {
    joint: &'a JointHistogram,
}

impl<'a> EmpiricalMutualInformation<'a> {
    pub fn new(joint: &'a JointHistogram) -> Self {
        Self { joint }
    }
}

impl GlobalValue for EmpiricalMutualInformation<'_> {
    fn global_value(&self) -> f64 {
        let n = self.joint.total();
        if n == 0 {
            return 0.0;
        }
        let n_f = n as f64;
        let row = self.joint.row_marginal();
        let col = self.joint.col_marginal();

        let mut mi = 0.0_f64;
        for ((i, j), &cnt) in self.joint.counts().indexed_iter() {
            if cnt == 0 {
                continue;
            }
            // p(i,j) / (p(i) p(j)) = n_ij * N / (n_i * n_j)
            let p_ij = cnt as f64 / n_f;
            let ratio = (cnt as f64 * n_f) / (row.counts[i] as f64 * col.counts[j] as f64);
            mi += p_ij * ratio.ln();
        }
        // Rounding can leave a tiny negative residue for independent pairs.
        mi.max(0.0)
    }
}

impl MutualInformationEstimator for EmpiricalMutualInformation<'_> {}
