//! Solution registry for looking up and iterating puzzle solutions

use crate::error::{RegistrationError, SolveError};
use std::fmt;

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;
/// Parts per puzzle, in execution order
pub const PARTS: [u8; 2] = [1, 2];

/// A pure solution function: raw puzzle input in, answer out
///
/// Plain function pointers cannot capture state, so two entries never share
/// anything mutable.
pub type SolutionFn = fn(&str) -> Result<String, SolveError>;

/// A registered (year, day) pair with its two part functions
#[derive(Clone, Copy)]
pub struct SolutionEntry {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    part1: SolutionFn,
    part2: SolutionFn,
}

impl SolutionEntry {
    /// Run one part of this solution against `input`
    ///
    /// Returns `SolveError::PartOutOfRange` for any part other than 1 or 2.
    pub fn solve(&self, part: u8, input: &str) -> Result<String, SolveError> {
        match part {
            1 => (self.part1)(input),
            2 => (self.part2)(input),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl fmt::Debug for SolutionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionEntry")
            .field("year", &self.year)
            .field("day", &self.day)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a SolutionRegistry with fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```
/// # use aoc_registry::{RegistryBuilder, SolveError};
/// # fn p1(_: &str) -> Result<String, SolveError> { Ok("1".into()) }
/// # fn p2(_: &str) -> Result<String, SolveError> { Ok("2".into()) }
/// let registry = RegistryBuilder::new()
///     .register(2024, 1, p1, p2)
///     .unwrap()
///     .register(2024, 2, p1, p2)
///     .unwrap()
///     .build();
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<SolutionEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the two part functions for a specific year and day
    ///
    /// Entries keep the order in which they were registered.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solution registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate year-day combination or day outside 1-25
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        part1: SolutionFn,
        part2: SolutionFn,
    ) -> Result<Self, RegistrationError> {
        if day == 0 || day > DAYS_PER_YEAR {
            return Err(RegistrationError::InvalidDay(year, day));
        }
        if self.entries.iter().any(|e| e.year == year && e.day == day) {
            return Err(RegistrationError::DuplicateSolution(year, day));
        }
        self.entries.push(SolutionEntry {
            year,
            day,
            part1,
            part2,
        });
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable registry of solutions
///
/// Iteration yields entries in registration order.
#[derive(Debug, Default)]
pub struct SolutionRegistry {
    entries: Vec<SolutionEntry>,
}

impl SolutionRegistry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up the entry for a specific year and day
    pub fn get(&self, year: u16, day: u8) -> Option<&SolutionEntry> {
        self.entries
            .iter()
            .find(|e| e.year == year && e.day == day)
    }

    /// Iterate over all entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SolutionEntry> + '_ {
        self.entries.iter()
    }

    /// Get the number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SolutionRegistry {
    type Item = &'a SolutionEntry;
    type IntoIter = std::slice::Iter<'a, SolutionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
