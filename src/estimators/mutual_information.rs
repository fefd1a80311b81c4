// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::MiError;
use crate::estimators::approaches::discrete::DiscreteMutualInformation;
use crate::estimators::approaches::discrete::chao_shen::ChaoShenEntropy;
use crate::estimators::approaches::discrete::discrete_utils::BinCounts;
use crate::estimators::approaches::discrete::joint::JointHistogram;
use crate::estimators::approaches::discrete::miller_madow::MillerMadowEntropy;
use crate::estimators::approaches::discrete::mle::{DiscreteEntropy, EmpiricalMutualInformation};
use crate::estimators::approaches::discrete::shrink::ShrinkEntropy;
use crate::estimators::traits::{FromCounts, GlobalValue};

/// Mutual information estimator, selected once per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MiEstimator {
    /// Maximum likelihood (plug-in) estimate.
    #[default]
    Empirical,
    /// Plug-in entropies with the (K-1)/(2N) correction on marginals and joint.
    MillerMadow,
    /// Coverage-adjusted Chao–Shen entropies.
    ChaoShen,
    /// James–Stein shrinkage towards the uniform distribution.
    Shrinkage,
}

impl MiEstimator {
    pub const ALL: [MiEstimator; 4] = [
        MiEstimator::Empirical,
        MiEstimator::MillerMadow,
        MiEstimator::ChaoShen,
        MiEstimator::Shrinkage,
    ];

    /// Mutual information of a joint table in nats, clipped at zero.
    pub fn mutual_information(&self, joint: &JointHistogram) -> f64 {
        let h_marginals = match self {
            // the direct formula does not need them
            MiEstimator::Empirical => [0.0; 2],
            _ => [
                self.entropy(joint.row_marginal()),
                self.entropy(joint.col_marginal()),
            ],
        };
        self.mutual_information_with_marginals(joint, h_marginals)
    }

    /// As [`mutual_information`](Self::mutual_information), with the marginal entropies
    /// `[H(X), H(Y)]` (nats, this estimator) supplied by the caller. The empirical
    /// estimator uses the direct formula and ignores them.
    pub fn mutual_information_with_marginals(
        &self,
        joint: &JointHistogram,
        h_marginals: [f64; 2],
    ) -> f64 {
        let mi = match self {
            MiEstimator::Empirical => EmpiricalMutualInformation::new(joint).global_value(),
            MiEstimator::MillerMadow => {
                DiscreteMutualInformation::<MillerMadowEntropy>::with_marginal_entropies(
                    joint,
                    h_marginals,
                )
                .global_value()
            }
            MiEstimator::ChaoShen => {
                DiscreteMutualInformation::<ChaoShenEntropy>::with_marginal_entropies(
                    joint,
                    h_marginals,
                )
                .global_value()
            }
            MiEstimator::Shrinkage => {
                DiscreteMutualInformation::<ShrinkEntropy>::with_marginal_entropies(
                    joint,
                    h_marginals,
                )
                .global_value()
            }
        };
        mi.max(0.0)
    }

    /// Entropy of one marginal histogram in nats. This is also MI(X; X).
    pub fn entropy(&self, counts: BinCounts) -> f64 {
        match self {
            MiEstimator::Empirical => DiscreteEntropy::from_counts(counts).global_value(),
            MiEstimator::MillerMadow => MillerMadowEntropy::from_counts(counts).global_value(),
            MiEstimator::ChaoShen => ChaoShenEntropy::from_counts(counts).global_value(),
            MiEstimator::Shrinkage => ShrinkEntropy::from_counts(counts).global_value(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MiEstimator::Empirical => "empirical",
            MiEstimator::MillerMadow => "miller_madow",
            MiEstimator::ChaoShen => "chao_shen",
            MiEstimator::Shrinkage => "shrinkage",
        }
    }
}

impl fmt::Display for MiEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MiEstimator {
    type Err = MiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empirical" | "ml" | "mle" => Ok(MiEstimator::Empirical),
            "miller_madow" | "mm" => Ok(MiEstimator::MillerMadow),
            "chao_shen" | "cs" => Ok(MiEstimator::ChaoShen),
            "shrinkage" | "shrink" => Ok(MiEstimator::Shrinkage),
            other => Err(MiError::InvalidConfiguration(format!(
                "unknown estimator '{other}'"
            ))),
        }
    }
}

/// Logarithm base of the reported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogBase {
    /// Natural logarithm (nats).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "e"))]
    E,
    /// Base 2 (bits).
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Two,
}

impl LogBase {
    /// Convert a value computed in nats into this base.
    #[inline]
    pub fn convert(&self, nats: f64) -> f64 {
        match self {
            LogBase::E => nats,
            LogBase::Two => nats / std::f64::consts::LN_2,
        }
    }
}

impl FromStr for LogBase {
    type Err = MiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "e" | "nats" | "ln" => Ok(LogBase::E),
            "2" | "bits" | "log2" => Ok(LogBase::Two),
            other => Err(MiError::InvalidConfiguration(format!(
                "unknown log base '{other}'"
            ))),
        }
    }
}
