pub mod approaches;
pub mod dataset;
pub mod matrix;
pub mod mutual_information;
pub mod traits;

pub use traits::{FromCounts, GlobalValue, JointEntropy, MutualInformationEstimator};
