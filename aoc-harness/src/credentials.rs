//! Session credential loaded from a local secrets file

use crate::error::CredentialError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Key holding the session cookie
pub const SESSION_KEY: &str = "AOC_SESSION";
/// Value shipped in example secrets files
pub const PLACEHOLDER: &str = "your_session_cookie_here";

/// Opaque session token; empty means "fetch unavailable"
#[derive(Clone, Default)]
pub struct Credential {
    token: Zeroizing<String>,
}

impl Credential {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = if self.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_tuple("Credential").field(&shown).finish()
    }
}

/// Reads `KEY=value` secrets files
#[derive(Debug, Clone)]
pub struct CredentialLoader {
    path: PathBuf,
}

impl CredentialLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the session credential, never failing
    ///
    /// Any problem is logged as a warning and yields an empty credential.
    pub fn load(&self) -> Credential {
        match self.try_load() {
            Ok(token) => {
                debug!(path = %self.path.display(), "loaded session credential");
                Credential { token }
            }
            Err(e) => {
                warn!("{}", e);
                Credential::default()
            }
        }
    }

    fn try_load(&self) -> Result<Zeroizing<String>, CredentialError> {
        let contents = fs::read_to_string(&self.path)
            .map(Zeroizing::new)
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => CredentialError::NotFound(self.path.clone()),
                _ => CredentialError::Unreadable {
                    path: self.path.clone(),
                    source,
                },
            })?;

        match find_session(&contents) {
            None => Err(CredentialError::KeyMissing(self.path.clone())),
            Some(value) if value.is_empty() || value == PLACEHOLDER => {
                Err(CredentialError::Placeholder(self.path.clone()))
            }
            Some(value) => Ok(Zeroizing::new(value.to_string())),
        }
    }
}

/// Find the first `AOC_SESSION=` line, skipping blanks and `#` comments
fn find_session(contents: &str) -> Option<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .find_map(|line| line.strip_prefix(SESSION_KEY)?.strip_prefix('='))
        .map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn loader_with(contents: &str) -> (TempDir, CredentialLoader) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, contents).unwrap();
        (temp, CredentialLoader::new(path))
    }

    #[test]
    fn test_reads_session() {
        let (_temp, loader) = loader_with("# comment\n\nOTHER=1\nAOC_SESSION=  abc123  \n");
        let credential = loader.load();
        assert_eq!(credential.token(), "abc123");
        assert!(!credential.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let (_temp, loader) = loader_with("AOC_SESSION=first\nAOC_SESSION=second\n");
        assert_eq!(loader.load().token(), "first");
    }

    #[test]
    fn test_commented_key_ignored() {
        let (_temp, loader) = loader_with("# AOC_SESSION=commented\n   #AOC_SESSION=x\n");
        assert!(loader.load().is_empty());
        assert!(matches!(
            loader.try_load(),
            Err(CredentialError::KeyMissing(_))
        ));
    }

    #[test]
    fn test_placeholder_is_empty() {
        let (_temp, loader) = loader_with("AOC_SESSION=your_session_cookie_here\n");
        assert!(loader.load().is_empty());
        assert!(matches!(
            loader.try_load(),
            Err(CredentialError::Placeholder(_))
        ));

        let (_temp, loader) = loader_with("AOC_SESSION=   \n");
        assert!(matches!(
            loader.try_load(),
            Err(CredentialError::Placeholder(_))
        ));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let loader = CredentialLoader::new(temp.path().join("absent.env"));
        assert!(loader.load().is_empty());
        assert!(matches!(loader.try_load(), Err(CredentialError::NotFound(_))));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let loader = CredentialLoader::new(temp.path());
        assert!(loader.load().is_empty());
        assert!(matches!(
            loader.try_load(),
            Err(CredentialError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_similar_key_not_matched() {
        let (_temp, loader) = loader_with("AOC_SESSION_OLD=abc\nAOC_SESSIONS=def\n");
        assert!(loader.load().is_empty());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!(
            "{:?}",
            Credential {
                token: Zeroizing::new("secret-token".to_string())
            }
        );
        assert!(!debug.contains("secret-token"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Surrounding whitespace and unrelated lines never change the token
        #[test]
        fn prop_token_extracted(
            token in "[a-f0-9]{16,96}",
            pad_left in "[ \t]{0,3}",
            pad_right in "[ \t]{0,3}",
            noise in prop::collection::vec("(# .*|[A-Z_]{1,8}=[a-z]{0,5}|)", 0..5),
        ) {
            let mut contents = noise.join("\n");
            contents.push_str(&format!("\n{pad_left}AOC_SESSION={pad_right}{token}{pad_right}\n"));
            prop_assert_eq!(find_session(&contents), Some(token.as_str()));
        }
    }
}
