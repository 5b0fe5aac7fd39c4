//! Configuration resolution from CLI args

use crate::cli::{Args, Selection};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Year/day/part filter
    pub selection: Selection,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Secrets file holding the session cookie
    pub env_file: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, expanding `~` in paths
    pub fn from_args(args: Args) -> Self {
        Config {
            selection: args.selection(),
            cache_dir: expand_tilde(&args.cache_dir),
            env_file: expand_tilde(&args.env_file),
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
