// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! All-pairs batch driver.
//!
//! Every variable is discretised and its entropy estimated once; the N(N-1)/2 pairs above
//! the diagonal are then estimated independently on a caller-owned rayon pool and mirrored
//! into the symmetric result. Workers only read the shared discretisations and each
//! returns the value of exactly one pair, so no locking is involved.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::{debug, info, warn};
use ndarray::{ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

use crate::config::MiConfig;
use crate::error::{MiError, Result};
use crate::estimators::approaches::binning::Discretization;
use crate::estimators::approaches::discrete::joint::JointHistogram;
use crate::estimators::dataset::SampleMatrix;
use crate::estimators::matrix::{MiMatrix, PartialMiMatrix, n_pairs, upper_pairs};

/// Cooperative cancellation flag, checked by workers before each pair.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Worker pool owned by the caller: create it, submit any number of batches, drop it to
/// shut the threads down.
pub struct MiWorkerPool {
    pool: rayon::ThreadPool,
    threads: usize,
}

impl MiWorkerPool {
    pub fn new(parallelism: usize) -> Result<Self> {
        if parallelism < 1 {
            return Err(MiError::InvalidConfiguration(
                "parallelism must be at least 1".to_string(),
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .thread_name(|i| format!("fastgenemi-worker-{i}"))
            .build()
            .map_err(|e| MiError::ThreadPool(e.to_string()))?;
        Ok(Self {
            pool,
            threads: parallelism,
        })
    }

    /// Pool sized by `config.parallelism`.
    pub fn from_config(config: &MiConfig) -> Result<Self> {
        Self::new(config.parallelism)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Full MI matrix of a continuous sample matrix.
    ///
    /// `config.parallelism` is not consulted here; the pool's own size applies.
    pub fn compute(&self, samples: &SampleMatrix, config: &MiConfig) -> Result<MiMatrix> {
        let bins = self.discretize_samples(samples, config)?;
        self.finish(&bins, config, None)
    }

    /// As [`compute`](Self::compute), but stops with `Cancelled` once `token` fires.
    /// Nothing computed so far is returned.
    pub fn compute_with_cancel(
        &self,
        samples: &SampleMatrix,
        config: &MiConfig,
        token: &CancellationToken,
    ) -> Result<MiMatrix> {
        let bins = self.discretize_samples(samples, config)?;
        self.finish(&bins, config, Some(token))
    }

    /// Partial-results mode: on cancellation the pairs finished so far are kept and the
    /// rest are left as `NaN`.
    pub fn compute_partial(
        &self,
        samples: &SampleMatrix,
        config: &MiConfig,
        token: &CancellationToken,
    ) -> Result<PartialMiMatrix> {
        let bins = self.discretize_samples(samples, config)?;
        let entropies = self.marginal_entropies(&bins, config);
        let upper = self.run_pairs(&bins, &entropies, config, Some(token))?;
        let partial = PartialMiMatrix::from_parts(&diagonal(&entropies, config), &upper);
        if !partial.is_complete() {
            info!(
                "batch cancelled after {} of {} pairs",
                partial.completed_pairs(),
                partial.total_pairs()
            );
        }
        Ok(partial)
    }

    /// Full MI matrix of pre-discretised data (variables × samples integer labels).
    ///
    /// Labels are compacted per variable, so any integer coding (including 1-based bins) works.
    /// The binning options of `config` are ignored.
    pub fn compute_discrete(
        &self,
        codes: ArrayView2<'_, i32>,
        config: &MiConfig,
    ) -> Result<MiMatrix> {
        let bins = self.discretize_codes(codes, config)?;
        self.finish(&bins, config, None)
    }

    pub fn compute_discrete_with_cancel(
        &self,
        codes: ArrayView2<'_, i32>,
        config: &MiConfig,
        token: &CancellationToken,
    ) -> Result<MiMatrix> {
        let bins = self.discretize_codes(codes, config)?;
        self.finish(&bins, config, Some(token))
    }

    fn discretize_samples(
        &self,
        samples: &SampleMatrix,
        config: &MiConfig,
    ) -> Result<Vec<Discretization>> {
        config.validate()?;
        check_variables(samples.n_variables())?;
        debug!(
            "discretising {} variables x {} samples ({:?}, {} bins)",
            samples.n_variables(),
            samples.n_samples(),
            config.binning,
            config.bins
        );
        let variables: Vec<ArrayView1<'_, f64>> = samples.variables().collect();
        let bins = self.pool.install(|| {
            variables
                .into_par_iter()
                .map(|values| Discretization::from_values(values, &config.binning, config.bins))
                .collect::<Result<Vec<_>>>()
        })?;
        check_degenerate(&bins, config)?;
        Ok(bins)
    }

    fn discretize_codes(
        &self,
        codes: ArrayView2<'_, i32>,
        config: &MiConfig,
    ) -> Result<Vec<Discretization>> {
        config.validate()?;
        check_variables(codes.nrows())?;
        debug!(
            "adopting {} pre-discretised variables x {} samples",
            codes.nrows(),
            codes.ncols()
        );
        let bins = codes
            .axis_iter(Axis(0))
            .map(Discretization::from_codes)
            .collect::<Result<Vec<_>>>()?;
        check_degenerate(&bins, config)?;
        Ok(bins)
    }

    fn finish(
        &self,
        bins: &[Discretization],
        config: &MiConfig,
        token: Option<&CancellationToken>,
    ) -> Result<MiMatrix> {
        let started = Instant::now();
        let entropies = self.marginal_entropies(bins, config);
        let upper = self.run_pairs(bins, &entropies, config, token)?;
        let upper: Vec<f64> = match upper.into_iter().collect::<Option<Vec<f64>>>() {
            Some(values) => values,
            None => {
                info!("batch cancelled; discarding partial results");
                return Err(MiError::Cancelled);
            }
        };
        let matrix = MiMatrix::from_parts(
            &diagonal(&entropies, config),
            &upper,
            config.estimator,
            config.log_base,
        );
        info!(
            "estimated {} pairs with {} on {} threads in {:?}",
            upper.len(),
            config.estimator,
            self.threads,
            started.elapsed()
        );
        Ok(matrix)
    }

    /// Entropy (nats) of every variable, estimated once and shared by all its pairs.
    fn marginal_entropies(&self, bins: &[Discretization], config: &MiConfig) -> Vec<f64> {
        let estimator = config.estimator;
        self.pool.install(|| {
            bins.par_iter()
                .map(|d| estimator.entropy(d.counts()))
                .collect()
        })
    }

    /// Estimate every pair above the diagonal; `None` marks pairs skipped after cancellation.
    fn run_pairs(
        &self,
        bins: &[Discretization],
        entropies: &[f64],
        config: &MiConfig,
        token: Option<&CancellationToken>,
    ) -> Result<Vec<Option<f64>>> {
        let pairs = upper_pairs(bins.len());
        debug!("submitting {} pairs to {} threads", pairs.len(), self.threads);
        let estimator = config.estimator;
        let log_base = config.log_base;
        self.pool.install(|| {
            pairs
                .par_iter()
                .map(|&(i, j)| -> Result<Option<f64>> {
                    if token.is_some_and(CancellationToken::is_cancelled) {
                        return Ok(None);
                    }
                    let joint = JointHistogram::from_bins(&bins[i], &bins[j])?;
                    let mi = estimator
                        .mutual_information_with_marginals(&joint, [entropies[i], entropies[j]]);
                    Ok(Some(log_base.convert(mi)))
                })
                .collect()
        })
    }
}

/// Convenience entry point: builds a pool of `config.parallelism` threads for a single batch.
pub fn mutual_information_matrix(samples: &SampleMatrix, config: &MiConfig) -> Result<MiMatrix> {
    config.validate()?;
    MiWorkerPool::from_config(config)?.compute(samples, config)
}

/// Convenience entry point for pre-discretised integer labels (variables × samples).
pub fn mutual_information_matrix_discrete(
    codes: ArrayView2<'_, i32>,
    config: &MiConfig,
) -> Result<MiMatrix> {
    config.validate()?;
    MiWorkerPool::from_config(config)?.compute_discrete(codes, config)
}

/// Mutual information of a single pair of continuous variables, binned per `config`.
pub fn pairwise_mutual_information(
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
    config: &MiConfig,
) -> Result<f64> {
    config.validate()?;
    if x.len() != y.len() {
        return Err(MiError::DimensionMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    let bx = Discretization::from_values(x, &config.binning, config.bins)?;
    let by = Discretization::from_values(y, &config.binning, config.bins)?;
    let pair = [bx, by];
    check_degenerate(&pair, config)?;
    let joint = JointHistogram::from_bins(&pair[0], &pair[1])?;
    Ok(config.log_base.convert(config.estimator.mutual_information(&joint)))
}

fn check_variables(n: usize) -> Result<()> {
    if n < 2 {
        return Err(MiError::InvalidConfiguration(format!(
            "need at least 2 variables, got {n}"
        )));
    }
    debug!("{} variables -> {} pairs", n, n_pairs(n));
    Ok(())
}

fn check_degenerate(bins: &[Discretization], config: &MiConfig) -> Result<()> {
    for (variable, d) in bins.iter().enumerate() {
        if d.is_degenerate() {
            if config.strict_degenerate {
                return Err(MiError::DegenerateInput { variable });
            }
            warn!("variable {variable} has zero variance; using a single bin");
        }
    }
    Ok(())
}

/// MI(i, i) = H(i) in the configured log base.
fn diagonal(entropies: &[f64], config: &MiConfig) -> Vec<f64> {
    entropies
        .iter()
        .map(|&h| config.log_base.convert(h))
        .collect()
}
