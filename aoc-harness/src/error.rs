//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type; any of these aborts the run
#[derive(Error, Debug)]
pub enum CliError {
    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_registry::RegistrationError),
}

/// Why no session credential could be loaded
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Secrets file does not exist
    #[error("{} not found, cannot fetch inputs automatically", .0.display())]
    NotFound(PathBuf),

    /// Secrets file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `AOC_SESSION=` line in the file
    #[error("AOC_SESSION not found in {}", .0.display())]
    KeyMissing(PathBuf),

    /// `AOC_SESSION` is empty or still the placeholder
    #[error("AOC_SESSION not configured in {}", .0.display())]
    Placeholder(PathBuf),
}

/// Input cache errors; each one skips a single (year, day)
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error reading or writing a cache file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),

    /// Fetch needed but no session cookie is available
    #[error("cannot fetch input: no valid session cookie")]
    NoCredential,

    /// Remote fetch failed (transport, status or encoding)
    #[error("fetch failed: {0}")]
    Fetch(#[from] aoc_http_client::AocError),
}
