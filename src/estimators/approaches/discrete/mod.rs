// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: histograms, entropy estimators over bin counts
// and the all-pairs batch driver.

pub mod discrete_utils;
pub mod joint;

pub mod chao_shen;
pub mod miller_madow;
pub mod mle;
pub mod shrink;

pub mod discrete_batch;

use crate::estimators::approaches::discrete::joint::JointHistogram;
use crate::estimators::traits::{FromCounts, GlobalValue, MutualInformationEstimator};

/// Discrete Mutual Information estimator using the entropy-summation formula.
///
/// This estimator can wrap any entropy estimator that works on bin counts:
/// both marginals and the joint table are fed through the same estimator, so its
/// bias correction is applied consistently to all three terms.
pub struct DiscreteMutualInformation<E> {
    h_marginals: [f64; 2],
    joint: E,
}

impl<E: FromCounts + GlobalValue> DiscreteMutualInformation<E> {
    pub fn new(joint: &JointHistogram) -> Self {
        let h_marginals = [
            E::from_counts(joint.row_marginal()).global_value(),
            E::from_counts(joint.col_marginal()).global_value(),
        ];
        Self::with_marginal_entropies(joint, h_marginals)
    }

    /// Reuse marginal entropies `[H(X), H(Y)]` already estimated with `E`, so only the
    /// joint table is estimated per pair.
    pub fn with_marginal_entropies(joint: &JointHistogram, h_marginals: [f64; 2]) -> Self {
        Self {
            h_marginals,
            joint: E::from_counts(joint.flattened()),
        }
    }
}

impl<E: GlobalValue> GlobalValue for DiscreteMutualInformation<E> {
    fn global_value(&self) -> f64 {
        let h_marginals: f64 = self.h_marginals.iter().sum();
        let h_joint = self.joint.global_value();
        // I(X; Y) = H(X) + H(Y) - H(X, Y)
        h_marginals - h_joint
    }
}

impl<E: GlobalValue> MutualInformationEstimator for DiscreteMutualInformation<E> {}
