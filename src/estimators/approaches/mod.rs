pub mod binning;
pub mod discrete;

// Unified re-exports for the binned estimators so tests and users can import
// fastgenemi::estimators::approaches::* ergonomically.
pub use binning::{BinEdges, BinningStrategy, Discretization};
pub use discrete::DiscreteMutualInformation;
pub use discrete::chao_shen::ChaoShenEntropy;
pub use discrete::joint::JointHistogram;
pub use discrete::miller_madow::MillerMadowEntropy;
pub use discrete::mle::{DiscreteEntropy, EmpiricalMutualInformation};
pub use discrete::shrink::ShrinkEntropy;
