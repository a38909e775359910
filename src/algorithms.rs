//! Reference algorithms with known growth.
//!
//! Each [`Builtin`] pairs a routine with the growth model it is expected to
//! exhibit, so sweeps over them double as end-to-end checks of the
//! measurement and classification pipeline.
//!
//! All routines take the generated workload read-only and return a checksum
//! that depends on the work done, so the optimizer cannot drop the loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::GrowthModel;

/// A built-in reference algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Builtin {
    /// Read the first element.
    ConstantFirst,
    /// Binary search for an element a third of the way in.
    BinarySearch,
    /// Sum every element.
    LinearSum,
    /// Top-down merge sort of a copy.
    MergeSort,
    /// Bubble sort of a copy, without the early-exit pass.
    BubbleSort,
    /// Count ordered pairs `i < j` with `x[i] < x[j]`.
    PairCount,
}

impl Builtin {
    /// Every built-in, simplest growth first.
    pub const ALL: [Builtin; 6] = [
        Builtin::ConstantFirst,
        Builtin::BinarySearch,
        Builtin::LinearSum,
        Builtin::MergeSort,
        Builtin::BubbleSort,
        Builtin::PairCount,
    ];

    /// Registry name.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::ConstantFirst => "constant_first",
            Builtin::BinarySearch => "binary_search",
            Builtin::LinearSum => "linear_sum",
            Builtin::MergeSort => "merge_sort",
            Builtin::BubbleSort => "bubble_sort",
            Builtin::PairCount => "pair_count",
        }
    }

    /// Growth model this algorithm should be classified as.
    pub fn expected(self) -> GrowthModel {
        match self {
            Builtin::ConstantFirst => GrowthModel::Constant,
            Builtin::BinarySearch => GrowthModel::Logarithmic,
            Builtin::LinearSum => GrowthModel::Linear,
            Builtin::MergeSort => GrowthModel::Linearithmic,
            Builtin::BubbleSort | Builtin::PairCount => GrowthModel::Quadratic,
        }
    }

    /// Look up a built-in by registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Run the algorithm on `input`.
    ///
    /// `BinarySearch` assumes ascending input, as produced by the
    /// sequential generator.
    pub fn run(self, input: &[u64]) -> u64 {
        match self {
            Builtin::ConstantFirst => input.first().copied().unwrap_or(0),
            Builtin::BinarySearch => binary_search(input),
            Builtin::LinearSum => input.iter().fold(0u64, |acc, &x| acc.wrapping_add(x)),
            Builtin::MergeSort => {
                let mut data = input.to_vec();
                merge_sort(&mut data);
                checksum(&data)
            }
            Builtin::BubbleSort => {
                let mut data = input.to_vec();
                bubble_sort(&mut data);
                checksum(&data)
            }
            Builtin::PairCount => pair_count(input),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|b| b.name()).collect();
            format!("unknown algorithm '{}' (known: {})", s, known.join(", "))
        })
    }
}

fn binary_search(input: &[u64]) -> u64 {
    let target = input.len() as u64 / 3;
    match input.binary_search(&target) {
        Ok(i) | Err(i) => i as u64,
    }
}

fn merge_sort(data: &mut [u64]) {
    let len = data.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);

    let mut merged = Vec::with_capacity(len);
    let (left, right) = data.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    data.copy_from_slice(&merged);
}

fn bubble_sort(data: &mut [u64]) {
    let len = data.len();
    for pass in 0..len {
        for j in 0..len - 1 - pass {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

fn pair_count(input: &[u64]) -> u64 {
    let mut count = 0u64;
    for (i, &a) in input.iter().enumerate() {
        for &b in &input[i + 1..] {
            if a < b {
                count += 1;
            }
        }
    }
    count
}

fn checksum(sorted: &[u64]) -> u64 {
    sorted
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &x)| acc.wrapping_add(x ^ i as u64))
}
