//! Error types for the registry

use thiserror::Error;

/// Error type for running a single part of a solution
#[derive(Debug, Error)]
pub enum SolveError {
    /// Input format doesn't match expected structure
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The requested part number is out of range (only parts 1 and 2 exist)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solution for a year-day combination that already exists
    #[error("Duplicate solution registration for year {0} day {1}")]
    DuplicateSolution(u16, u8),
    /// Day outside of the puzzle calendar
    #[error("Invalid day {1} for year {0}")]
    InvalidDay(u16, u8),
}
