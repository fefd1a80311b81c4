// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # fastgenemi
//!
//! Pairwise mutual information matrices for gene-expression-style tables: every variable is
//! binned once, all N(N-1)/2 pairs are estimated in parallel on a caller-owned worker pool,
//! and the result is returned as a symmetric N×N matrix.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastgenemi::{MiConfig, MiEstimator, SampleMatrix, mutual_information_matrix};
//! use ndarray::array;
//!
//! // rows are variables, columns are samples
//! let samples = SampleMatrix::new(array![
//!     [1.0, 2.0, 3.0, 4.0],
//!     [1.0, 2.0, 3.0, 4.0],
//!     [4.0, 1.0, 3.0, 2.0],
//! ])
//! .unwrap();
//! let config = MiConfig::builder()
//!     .bins(2)
//!     .estimator(MiEstimator::Empirical)
//!     .build()
//!     .unwrap();
//! let mim = mutual_information_matrix(&samples, &config).unwrap();
//! assert!((mim.get(0, 1) - 2f64.ln()).abs() < 1e-12);
//! ```
//!
//! ## Estimators
//!
//! | Estimator | Entropy term | Notes |
//! |-----------|--------------|-------|
//! | `Empirical` | maximum likelihood | direct Σ p ln(p / (p_x p_y)) |
//! | `MillerMadow` | ML + (K-1)/(2N) | K = occupied bins |
//! | `ChaoShen` | coverage adjusted | for undersampled tables |
//! | `Shrinkage` | James–Stein towards uniform | λ clipped to [0, 1] |
//!
//! All estimators accumulate in `f64`, report in nats or bits (`LogBase`) and clip
//! negative results to zero.
//!
//! ## Binning
//!
//! Equal-width, equal-frequency or caller-supplied edges. A value on an interior edge goes
//! to the lower bin; constant variables collapse to a single bin. Pre-discretised integer
//! tables can be passed directly with [`mutual_information_matrix_discrete`].
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the configuration types.

pub mod config;
pub mod error;
pub mod estimators;

pub use config::{MiConfig, MiConfigBuilder};
pub use error::{MiError, Result};
pub use estimators::approaches::binning::{BinEdges, BinningStrategy, Discretization};
pub use estimators::approaches::discrete::discrete_batch::{
    CancellationToken, MiWorkerPool, mutual_information_matrix, mutual_information_matrix_discrete,
    pairwise_mutual_information,
};
pub use estimators::approaches::discrete::joint::JointHistogram;
pub use estimators::dataset::SampleMatrix;
pub use estimators::matrix::{MiMatrix, PartialMiMatrix};
pub use estimators::mutual_information::{LogBase, MiEstimator};
