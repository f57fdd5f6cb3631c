//! Output configuration read from the environment.
//!
//! | Variable           | Purpose                             |
//! |--------------------|-------------------------------------|
//! | `RSS_OUTPUT_PATH`  | Destination of the RSS 2.0 document |
//! | `ATOM_OUTPUT_PATH` | Destination of the Atom 1.0 document |
//!
//! An unset or empty variable skips that format. A `.env` file in the
//! working directory is loaded first; variables already set in the process
//! environment win. A missing `.env` is fine, an unreadable or malformed one
//! is an error.

use crate::debug;
use anyhow::{Context, Result};
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Feed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// RSS 2.0.
    Rss,
    /// Atom 1.0.
    Atom,
}

impl FeedFormat {
    /// Formats in the order they are written.
    pub const ALL: [Self; 2] = [Self::Rss, Self::Atom];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Atom => "atom",
        }
    }

    /// Environment variable holding the output path for this format.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Rss => "RSS_OUTPUT_PATH",
            Self::Atom => "ATOM_OUTPUT_PATH",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedConfig {
    pub rss_path: Option<PathBuf>,
    pub atom_path: Option<PathBuf>,
}

impl FeedConfig {
    /// Load from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self> {
        if !env_file_loaded(dotenvy::dotenv())? {
            debug!("config"; "no .env file found");
        }
        Ok(Self::from_lookup(|key| env::var_os(key)))
    }

    /// Load from an arbitrary variable lookup.
    ///
    /// Values are kept as raw OS strings so non-UTF-8 paths survive.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let path = |format: FeedFormat| {
            lookup(format.env_var())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };

        Self {
            rss_path: path(FeedFormat::Rss),
            atom_path: path(FeedFormat::Atom),
        }
    }

    /// Destination for `format`, or `None` if that format is skipped.
    pub fn output_path(&self, format: FeedFormat) -> Option<&Path> {
        match format {
            FeedFormat::Rss => self.rss_path.as_deref(),
            FeedFormat::Atom => self.atom_path.as_deref(),
        }
    }
}

/// Whether a `.env` file was loaded. Only a missing file is tolerated.
fn env_file_loaded<T>(result: Result<T, dotenvy::Error>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e).context("failed to load .env"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_unset() {
        let config = FeedConfig::from_lookup(lookup(&[]));
        assert_eq!(config, FeedConfig::default());
        assert_eq!(config.output_path(FeedFormat::Rss), None);
        assert_eq!(config.output_path(FeedFormat::Atom), None);
    }

    #[test]
    fn test_empty_counts_as_unset() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("RSS_OUTPUT_PATH", ""),
            ("ATOM_OUTPUT_PATH", ""),
        ]));
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn test_both_set() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("RSS_OUTPUT_PATH", "public/rss.xml"),
            ("ATOM_OUTPUT_PATH", "public/atom.xml"),
        ]));
        assert_eq!(
            config.output_path(FeedFormat::Rss),
            Some(Path::new("public/rss.xml"))
        );
        assert_eq!(
            config.output_path(FeedFormat::Atom),
            Some(Path::new("public/atom.xml"))
        );
    }

    #[test]
    fn test_only_atom_set() {
        let config = FeedConfig::from_lookup(lookup(&[("ATOM_OUTPUT_PATH", "atom.xml")]));
        assert_eq!(config.rss_path, None);
        assert_eq!(config.atom_path, Some(PathBuf::from("atom.xml")));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(FeedFormat::ALL, [FeedFormat::Rss, FeedFormat::Atom]);
        assert_eq!(FeedFormat::Rss.name(), "rss");
        assert_eq!(FeedFormat::Atom.env_var(), "ATOM_OUTPUT_PATH");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_kept() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let raw = OsStr::from_bytes(b"/tmp/feed-\xFF.xml");
        let config = FeedConfig::from_lookup(|key| {
            (key == "RSS_OUTPUT_PATH").then(|| raw.to_os_string())
        });

        assert_eq!(config.output_path(FeedFormat::Rss), Some(Path::new(raw)));
        assert_eq!(config.atom_path, None);
    }

    #[test]
    fn test_missing_env_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let result = dotenvy::from_path(dir.path().join(".env"));
        assert!(!env_file_loaded(result).unwrap());
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "not a valid line\n").unwrap();

        let err = env_file_loaded(dotenvy::from_path(&path)).unwrap_err();
        assert!(err.to_string().contains(".env"), "{err}");
    }
}
