//! Workload generation and input-size strategies.
//!
//! - [`InputGenerator`] produces the workload handed to the algorithm under test
//! - [`SizeStrategy`] and [`parse_sizes`] produce the list of sizes to sweep

mod generator;
mod sizes;

pub use generator::{generate, InputGenerator, Reversed, Sequential, Shuffled};
pub use sizes::{parse_sizes, InputSize, SizeStrategy};
