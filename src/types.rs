//! Core value types shared by the measurement engine and the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One measured observation: input size and average time of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Input size.
    pub n: usize,
    /// Average duration of one invocation, in milliseconds.
    pub duration: f64,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(n: usize, duration: f64) -> Self {
        Self { n, duration }
    }
}

/// Candidate growth-rate models, ordered from simplest to most complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GrowthModel {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n log n)
    Linearithmic,
    /// O(n^2)
    Quadratic,
}

impl GrowthModel {
    /// All models in ascending complexity rank.
    pub const ALL: [GrowthModel; 5] = [
        GrowthModel::Constant,
        GrowthModel::Logarithmic,
        GrowthModel::Linear,
        GrowthModel::Linearithmic,
        GrowthModel::Quadratic,
    ];

    /// Complexity rank, 1 being the simplest.
    pub fn rank(self) -> u8 {
        match self {
            GrowthModel::Constant => 1,
            GrowthModel::Logarithmic => 2,
            GrowthModel::Linear => 3,
            GrowthModel::Linearithmic => 4,
            GrowthModel::Quadratic => 5,
        }
    }

    /// Big-O notation for this model.
    pub fn notation(self) -> &'static str {
        match self {
            GrowthModel::Constant => "O(1)",
            GrowthModel::Logarithmic => "O(log n)",
            GrowthModel::Linear => "O(n)",
            GrowthModel::Linearithmic => "O(n log n)",
            GrowthModel::Quadratic => "O(n^2)",
        }
    }

    /// Linearizing transform `f(n)` used as the regressor.
    ///
    /// Returns `None` where the transform is undefined (`ln 0`). The constant
    /// model has no regressor and always returns `None`.
    pub fn transform(self, n: usize) -> Option<f64> {
        let x = n as f64;
        match self {
            GrowthModel::Constant => None,
            GrowthModel::Logarithmic if n == 0 => None,
            GrowthModel::Logarithmic => Some(x.ln()),
            GrowthModel::Linear => Some(x),
            GrowthModel::Linearithmic if n == 0 => None,
            GrowthModel::Linearithmic => Some(x * x.ln()),
            GrowthModel::Quadratic => Some(x * x),
        }
    }

    /// Whether this model can use a point of size `n`.
    pub fn accepts(self, n: usize) -> bool {
        match self {
            GrowthModel::Constant => true,
            other => other.transform(n).is_some(),
        }
    }
}

impl fmt::Display for GrowthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}
