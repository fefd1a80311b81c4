// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::discrete::discrete_utils::BinCounts;
use crate::estimators::approaches::discrete::joint::JointHistogram;

pub trait GlobalValue {
    /// Compute and return the global value of the measure (natural log base).
    fn global_value(&self) -> f64;
}

/// Entropy estimators that work directly on a histogram.
pub trait FromCounts: Sized {
    fn from_counts(counts: BinCounts) -> Self;
}

/// Interface for estimators that support joint entropy $H(X, Y)$ of a tabulated pair.
pub trait JointEntropy {
    /// Entropy of the joint distribution, treating every cell of the table as one symbol.
    fn joint_entropy(joint: &JointHistogram) -> f64;
}

impl<E: FromCounts + GlobalValue> JointEntropy for E {
    fn joint_entropy(joint: &JointHistogram) -> f64 {
        E::from_counts(joint.flattened()).global_value()
    }
}

/// Marker trait for Mutual Information estimator instances.
pub trait MutualInformationEstimator: GlobalValue {}
