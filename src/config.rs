// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Batch configuration.

use crate::error::{MiError, Result};
use crate::estimators::approaches::binning::{BinEdges, BinningStrategy};
use crate::estimators::mutual_information::{LogBase, MiEstimator};

/// Default number of bins per variable.
pub const DEFAULT_BINS: usize = 10;

/// Settings for one mutual information batch.
///
/// `bins` is the requested bin count for [`BinningStrategy::EqualWidth`] and
/// [`BinningStrategy::EqualFrequency`]; supplied edges carry their own count.
/// `parallelism` is the number of worker threads used when the batch driver builds its own pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MiConfig {
    pub bins: usize,
    pub binning: BinningStrategy,
    pub estimator: MiEstimator,
    pub log_base: LogBase,
    pub parallelism: usize,
    /// Fail with `DegenerateInput` instead of falling back to a single bin.
    pub strict_degenerate: bool,
}

impl Default for MiConfig {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            binning: BinningStrategy::default(),
            estimator: MiEstimator::default(),
            log_base: LogBase::default(),
            parallelism: default_parallelism(),
            strict_degenerate: false,
        }
    }
}

impl MiConfig {
    pub fn builder() -> MiConfigBuilder {
        MiConfigBuilder::default()
    }

    /// Check every option; called by the batch driver before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.bins < 1 {
            return Err(MiError::InvalidConfiguration(format!(
                "bin count must be at least 1, got {}",
                self.bins
            )));
        }
        if self.parallelism < 1 {
            return Err(MiError::InvalidConfiguration(format!(
                "parallelism must be at least 1, got {}",
                self.parallelism
            )));
        }
        if let BinningStrategy::Edges(edges) = &self.binning {
            BinEdges::from_edges(edges.clone())?;
        }
        Ok(())
    }
}

/// Builder for [`MiConfig`]; `build` validates.
#[derive(Debug, Clone, Default)]
pub struct MiConfigBuilder {
    config: MiConfig,
}

impl MiConfigBuilder {
    pub fn bins(mut self, bins: usize) -> Self {
        self.config.bins = bins;
        self
    }

    pub fn binning(mut self, binning: BinningStrategy) -> Self {
        self.config.binning = binning;
        self
    }

    pub fn estimator(mut self, estimator: MiEstimator) -> Self {
        self.config.estimator = estimator;
        self
    }

    pub fn log_base(mut self, log_base: LogBase) -> Self {
        self.config.log_base = log_base;
        self
    }

    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.config.parallelism = parallelism;
        self
    }

    pub fn strict_degenerate(mut self, strict: bool) -> Self {
        self.config.strict_degenerate = strict;
        self
    }

    pub fn build(self) -> Result<MiConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
