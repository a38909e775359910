//! Input-size strategies.
//!
//! Sizes are `usize` everywhere inside the crate, so negative sizes cannot
//! reach the measurement engine. Sizes coming from signed integers or text
//! are validated here and rejected with [`Error::InvalidSize`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated, non-negative input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InputSize(usize);

impl InputSize {
    /// Wrap a size.
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    /// The size as `usize`.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<InputSize> for usize {
    fn from(size: InputSize) -> usize {
        size.0
    }
}

impl TryFrom<i64> for InputSize {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::invalid_size(value, "size must be non-negative"));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| Error::invalid_size(value, "size does not fit in usize"))
    }
}

impl FromStr for InputSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| Error::invalid_size(trimmed, "not an integer"))?;
        Self::try_from(value)
    }
}

impl fmt::Display for InputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strategy for producing the list of sizes to sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeStrategy {
    /// `10, 100, ..., 10^max_exponent`.
    PowersOfTen {
        /// Largest exponent (inclusive).
        max_exponent: u32,
    },
    /// `start, 2*start, 4*start, ...` (`count` sizes).
    Doubling {
        /// First size.
        start: usize,
        /// Number of sizes.
        count: usize,
    },
    /// `start, start+step, ...` (`count` sizes).
    Linear {
        /// First size.
        start: usize,
        /// Increment between sizes.
        step: usize,
        /// Number of sizes.
        count: usize,
    },
    /// `start..=end` every `step`, as in `parse_sizes("start..end:step")`.
    Range {
        /// First size.
        start: usize,
        /// Last size (inclusive).
        end: usize,
        /// Increment between sizes; must be positive.
        step: usize,
    },
    /// Explicit list, used as given.
    Custom(Vec<usize>),
}

impl SizeStrategy {
    /// Expand the strategy into concrete sizes.
    ///
    /// Fails with [`Error::InvalidSize`] if a size would overflow `usize` or
    /// a range is empty or has a zero step.
    pub fn sizes(&self) -> Result<Vec<usize>> {
        match self {
            SizeStrategy::PowersOfTen { max_exponent } => (1..=*max_exponent)
                .map(|exp| {
                    10usize
                        .checked_pow(exp)
                        .ok_or_else(|| Error::invalid_size(format!("10^{}", exp), "overflows usize"))
                })
                .collect(),
            SizeStrategy::Doubling { start, count } => (0..*count)
                .map(|i| {
                    u32::try_from(i)
                        .ok()
                        .and_then(|shift| 2usize.checked_pow(shift))
                        .and_then(|factor| start.checked_mul(factor))
                        .ok_or_else(|| {
                            Error::invalid_size(format!("{}*2^{}", start, i), "overflows usize")
                        })
                })
                .collect(),
            SizeStrategy::Linear { start, step, count } => (0..*count)
                .map(|i| {
                    step.checked_mul(i)
                        .and_then(|offset| start.checked_add(offset))
                        .ok_or_else(|| {
                            Error::invalid_size(format!("{}+{}*{}", start, step, i), "overflows usize")
                        })
                })
                .collect(),
            SizeStrategy::Range { start, end, step } => {
                range(&format!("{}..{}:{}", start, end, step), *start, *end, *step)
            }
            SizeStrategy::Custom(sizes) => Ok(sizes.clone()),
        }
    }
}

/// Parse a size list such as `"10,100,1000"` or `"100..1000:100"`.
///
/// Tokens are comma-separated; each is either a single integer or an
/// inclusive range `start..end` with an optional `:step` (default 1).
/// Order is preserved.
pub fn parse_sizes(input: &str) -> Result<Vec<usize>> {
    let mut sizes = Vec::new();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.split_once("..") {
            Some((start, rest)) => {
                let (end, step) = match rest.split_once(':') {
                    Some((end, step)) => (end, Some(step)),
                    None => (rest, None),
                };
                sizes.extend(parse_range(token, start, end, step)?);
            }
            None => sizes.push(token.parse::<InputSize>()?.get()),
        }
    }

    if sizes.is_empty() {
        return Err(Error::invalid_size(input, "no sizes given"));
    }
    Ok(sizes)
}

fn parse_range(token: &str, start: &str, end: &str, step: Option<&str>) -> Result<Vec<usize>> {
    let start = start.parse::<InputSize>()?.get();
    let end = end.parse::<InputSize>()?.get();
    let step = match step {
        Some(s) => s.parse::<InputSize>()?.get(),
        None => 1,
    };
    range(token, start, end, step)
}

fn range(token: &str, start: usize, end: usize, step: usize) -> Result<Vec<usize>> {
    if step == 0 {
        return Err(Error::invalid_size(token, "range step must be positive"));
    }
    if start > end {
        return Err(Error::invalid_size(token, "range start exceeds end"));
    }

    Ok((start..=end).step_by(step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_size_rejects_negative() {
        assert!(matches!(
            InputSize::try_from(-1),
            Err(Error::InvalidSize { .. })
        ));
        assert_eq!(InputSize::try_from(0).unwrap().get(), 0);
        assert!("abc".parse::<InputSize>().is_err());
        assert_eq!(" 42 ".parse::<InputSize>().unwrap().get(), 42);
    }

    #[test]
    fn test_strategies() {
        assert_eq!(
            SizeStrategy::PowersOfTen { max_exponent: 4 }.sizes().unwrap(),
            vec![10, 100, 1000, 10000]
        );
        assert_eq!(
            SizeStrategy::Doubling { start: 100, count: 5 }.sizes().unwrap(),
            vec![100, 200, 400, 800, 1600]
        );
        assert_eq!(
            SizeStrategy::Linear { start: 0, step: 250, count: 4 }.sizes().unwrap(),
            vec![0, 250, 500, 750]
        );
        assert_eq!(
            SizeStrategy::Range { start: 100, end: 500, step: 200 }.sizes().unwrap(),
            vec![100, 300, 500]
        );
        assert!(SizeStrategy::Range { start: 1, end: 5, step: 0 }.sizes().is_err());
        assert_eq!(
            SizeStrategy::Custom(vec![3, 1, 2]).sizes().unwrap(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_strategy_overflow_is_invalid_size() {
        let result = SizeStrategy::PowersOfTen { max_exponent: 40 }.sizes();
        assert!(matches!(result, Err(Error::InvalidSize { .. })));

        let result = SizeStrategy::Doubling { start: usize::MAX, count: 2 }.sizes();
        assert!(matches!(result, Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_parse_list_and_ranges() {
        assert_eq!(parse_sizes("10, 100,1000").unwrap(), vec![10, 100, 1000]);
        assert_eq!(
            parse_sizes("100..500:100").unwrap(),
            vec![100, 200, 300, 400, 500]
        );
        assert_eq!(parse_sizes("1..3,10").unwrap(), vec![1, 2, 3, 10]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "10,-5", "ten", "5..1", "1..10:0", "1..x"] {
            assert!(
                matches!(parse_sizes(bad), Err(Error::InvalidSize { .. })),
                "expected InvalidSize for {:?}",
                bad
            );
        }
    }
}
