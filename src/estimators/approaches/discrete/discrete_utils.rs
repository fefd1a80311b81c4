use ndarray::ArrayView1;
use std::collections::HashMap;

/// Dense bin counts shared by the discrete (histogram-based) entropy estimators.
///
/// Unlike a symbol dictionary, empty bins are kept: the shrinkage estimator needs the full
/// number of cells `b` for its uniform target, while Miller–Madow and Chao–Shen only look at
/// the occupied ones.
#[derive(Debug, Clone, PartialEq)]
pub struct BinCounts {
    /// Count per bin (zeros included)
    pub counts: Vec<usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of occupied bins
    pub k: usize,
}

impl BinCounts {
    pub fn from_counts(counts: Vec<usize>) -> Self {
        let n = counts.iter().sum();
        let k = counts.iter().filter(|&&c| c > 0).count();
        Self { counts, n, k }
    }

    /// Histogram of bin indices in `[0, bins)`.
    pub fn from_indices(indices: &[usize], bins: usize) -> Self {
        let mut counts = vec![0usize; bins];
        for &idx in indices {
            counts[idx] += 1;
        }
        Self::from_counts(counts)
    }

    /// Total number of bins, occupied or not.
    #[inline]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Maximum-likelihood probabilities p = n_b / N, one per bin.
    pub fn probabilities(&self) -> Vec<f64> {
        if self.n == 0 {
            return vec![0.0; self.counts.len()];
        }
        let n_f = self.n as f64;
        self.counts.iter().map(|&c| c as f64 / n_f).collect()
    }

    /// Number of bins holding exactly one observation (f1).
    pub fn singletons(&self) -> usize {
        self.counts.iter().filter(|&&c| c == 1).count()
    }
}

/// -Σ p ln p over a set of probabilities; zero cells contribute nothing.
#[inline]
pub fn plugin_entropy(probs: impl IntoIterator<Item = f64>) -> f64 {
    let mut h = 0.0_f64;
    for p in probs {
        if p > 0.0 {
            h -= p * p.ln();
        }
    }
    h
}

/// Helper function to count the occurrences of each value in an array.
/// Uses a dense vector for small non-negative ranges, otherwise falls back to HashMap.
pub fn count_frequencies(data: ArrayView1<'_, i32>) -> HashMap<i32, usize> {
    match data.as_slice() {
        Some(slice) => count_frequencies_slice(slice),
        None => count_frequencies_slice(&data.to_vec()),
    }
}

/// Count frequencies from a raw slice of i32 values with an optimized dense mode.
pub fn count_frequencies_slice(data: &[i32]) -> HashMap<i32, usize> {
    if data.is_empty() {
        return HashMap::new();
    }

    let mut min_v = i32::MAX;
    let mut max_v = i32::MIN;
    for &v in data.iter() {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }

    // Dense mode for non-negative labels with a small range (typical bin labels).
    const MAX_DENSE_RANGE: i32 = 4096;
    if min_v >= 0 && max_v - min_v <= MAX_DENSE_RANGE {
        let len = (max_v - min_v) as usize + 1;
        let mut dense = vec![0usize; len];
        for &v in data.iter() {
            dense[(v - min_v) as usize] += 1;
        }
        let mut map = HashMap::with_capacity(len);
        for (i, &cnt) in dense.iter().enumerate() {
            if cnt != 0 {
                map.insert(min_v + (i as i32), cnt);
            }
        }
        return map;
    }

    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Map arbitrary integer labels onto compact bin indices `0..K`.
///
/// Labels are ranked in ascending order, so `[3, 1, 3, 7]` becomes `[1, 0, 1, 2]` with K = 3.
/// Externally discretised tables are often 1-indexed; this makes the offset irrelevant.
pub fn compact_codes(data: ArrayView1<'_, i32>) -> (Vec<usize>, usize) {
    let mut labels: Vec<i32> = count_frequencies(data).into_keys().collect();
    labels.sort_unstable();
    let lookup: HashMap<i32, usize> = labels
        .iter()
        .enumerate()
        .map(|(idx, &label)| (label, idx))
        .collect();
    let indices = data.iter().map(|v| lookup[v]).collect();
    (indices, labels.len())
}
