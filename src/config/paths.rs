//! Path resolution for hiit configuration files.
//!
//! All hiit data is stored in `~/.hiit/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::HiitError;

/// Paths to hiit configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.hiit/`
    pub root: PathBuf,
    /// Config file: `~/.hiit/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HiitError> {
        let home = std::env::var("HOME")
            .map_err(|_| HiitError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".hiit");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".hiit"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-hiit");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}
