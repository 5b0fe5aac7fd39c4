//! Advent of Code Solution Registry
//!
//! A fixed, enumerable collection of puzzle solutions keyed by `(year, day)`.
//! Each entry holds two plain function pointers, one per part, that turn the
//! raw puzzle input into an answer string.
//!
//! # Quick Example
//!
//! ```
//! use aoc_registry::{SolutionRegistry, SolveError};
//!
//! fn part1(input: &str) -> Result<String, SolveError> {
//!     Ok(input.lines().count().to_string())
//! }
//!
//! fn part2(input: &str) -> Result<String, SolveError> {
//!     Ok(input.len().to_string())
//! }
//!
//! let registry = SolutionRegistry::builder()
//!     .register(2025, 1, part1, part2)
//!     .unwrap()
//!     .build();
//!
//! let entry = registry.get(2025, 1).unwrap();
//! assert_eq!(entry.solve(1, "a\nb\n").unwrap(), "2");
//! ```
//!
//! # Registration
//!
//! Registration is explicit: a [`RegistryBuilder`] is handed to each
//! solutions module, which calls [`RegistryBuilder::register`] for every day
//! it implements. Once [`RegistryBuilder::build`] is called the registry is
//! immutable; lookup and iteration are the only operations.

mod error;
mod registry;

pub use error::{RegistrationError, SolveError};
pub use registry::{
    DAYS_PER_YEAR, PARTS, RegistryBuilder, SolutionEntry, SolutionFn, SolutionRegistry,
};
