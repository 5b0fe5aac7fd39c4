//! Input cache for storing puzzle inputs locally

use crate::credentials::{Credential, CredentialLoader};
use crate::error::CacheError;
use aoc_http_client::{AocClient, AocError, StatusKind};
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File-based cache for puzzle inputs
///
/// Directory structure: `{cache_dir}/{year}_day{day:02}.txt`. An existing file
/// is always valid: it is never refetched or overwritten.
pub struct InputCache {
    cache_dir: PathBuf,
    client: AocClient,
    loader: CredentialLoader,
    /// Loaded on the first fetch, at most once
    credential: OnceCell<Credential>,
}

impl InputCache {
    /// Create a new input cache rooted at `cache_dir`
    pub fn new(cache_dir: PathBuf, client: AocClient, loader: CredentialLoader) -> Self {
        Self {
            cache_dir,
            client,
            loader,
            credential: OnceCell::new(),
        }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.cache_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Return the input for `year`/`day`, fetching and storing it at `path` if absent
    ///
    /// Reads `path` when it exists and never touches the network in that case.
    /// Otherwise performs one authenticated fetch and writes the body to `path`.
    pub fn ensure(&self, year: u16, day: u8, path: &Path) -> Result<String, CacheError> {
        if path.exists() {
            info!(year, day, path = %path.display(), "input file already exists");
            return fs::read_to_string(path).map_err(|source| CacheError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        let credential = self.credential.get_or_init(|| self.loader.load());
        if credential.is_empty() {
            return Err(CacheError::NoCredential);
        }

        let input = self
            .client
            .get_input(year, day, credential.token())
            .inspect_err(|e| log_fetch_failure(year, day, e))?;

        write_atomic(path, &input)?;
        info!(year, day, path = %path.display(), "fetched input");
        Ok(input)
    }
}

fn log_fetch_failure(year: u16, day: u8, error: &AocError) {
    match error.status_kind() {
        Some(StatusKind::NotYetAvailable) => {
            warn!(year, day, "day {} input not yet available", day)
        }
        Some(StatusKind::InvalidSessionOrServerError) => {
            warn!(year, day, "invalid session cookie or server error")
        }
        Some(StatusKind::Other) | None => warn!(year, day, %error, "input fetch failed"),
    }
}

/// Write `contents` to a sibling `.part` file, then rename it over `path`
fn write_atomic(path: &Path, contents: &str) -> Result<(), CacheError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", dir.display(), e))
        })?;
    }

    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let io_err = |source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&partial, contents).map_err(io_err)?;
    fs::rename(&partial, path).map_err(|source| {
        let _ = fs::remove_file(&partial);
        io_err(source)
    })
}
