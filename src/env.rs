//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::with_dotenv()`], which reads the process
//! environment and falls back to entries from a `.env` file. Tests use
//! [`Env::mock()`] backed by a `HashMap`, eliminating the need for
//! `unsafe` calls to [`std::env::set_var`] / [`std::env::remove_var`].
//!
//! The `.env` file is never written into the process environment; it is
//! consulted only through [`Env::var`].

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors while reading a dotenv file.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("failed to read env file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse env file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

/// Environment variable reader.
///
/// Wraps lookups so that production code hits `std::env` (then the
/// optional `.env` layer) while tests can supply a controlled set of values.
#[derive(Clone)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
    dotenv: HashMap<String, String>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment only.
    pub fn real() -> Self {
        Self {
            overrides: None,
            dotenv: HashMap::new(),
        }
    }

    /// Create an `Env` that reads the process environment, falling back to
    /// the entries of the dotenv file at `path`.
    ///
    /// Process variables win over file entries. A missing file is not an
    /// error; the result behaves like [`Env::real()`].
    pub fn with_dotenv(path: &Path) -> Result<Self, EnvError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no env file, using process environment only");
            return Ok(Self::real());
        }

        let file = std::fs::File::open(path).map_err(|e| EnvError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dotenv = parse_dotenv(file).map_err(|e| EnvError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), entries = dotenv.len(), "loaded env file");
        Ok(Self {
            overrides: None,
            dotenv,
        })
    }

    /// Create an `Env` backed by explicit key-value pairs.
    ///
    /// The process environment is ignored entirely.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            dotenv: HashMap::new(),
        }
    }

    /// Create an isolated `Env` from dotenv-formatted text.
    ///
    /// Like [`Env::mock()`], the process environment is ignored.
    pub fn from_dotenv<R: Read>(reader: R) -> Result<Self, dotenvy::Error> {
        Ok(Self {
            overrides: Some(parse_dotenv(reader)?),
            dotenv: HashMap::new(),
        })
    }

    /// Create an isolated `Env` from the dotenv file at `path`, ignoring the
    /// process environment. A missing file yields an empty environment.
    pub fn dotenv_only(path: &Path) -> Result<Self, EnvError> {
        if !path.exists() {
            return Ok(Self::mock(Vec::<(String, String)>::new()));
        }
        let file = std::fs::File::open(path).map_err(|e| EnvError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_dotenv(file).map_err(|e| EnvError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => match std::env::var(name) {
                Ok(val) => Ok(val),
                Err(e) => self.dotenv.get(name).cloned().ok_or(e),
            },
        }
    }

    /// Returns `true` if the variable is present.
    pub fn is_set(&self, name: &str) -> bool {
        self.var(name).is_ok()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

// Values are typically secrets, so only keys are shown.
impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = |map: &HashMap<String, String>| {
            let mut keys: Vec<_> = map.keys().cloned().collect();
            keys.sort();
            keys
        };
        f.debug_struct("Env")
            .field("overrides", &self.overrides.as_ref().map(keys))
            .field("dotenv", &keys(&self.dotenv))
            .finish()
    }
}

fn parse_dotenv<R: Read>(reader: R) -> Result<HashMap<String, String>, dotenvy::Error> {
    dotenvy::from_read_iter(reader).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("FOO", "bar"), ("BAZ", "qux")]);
        assert_eq!(env.var("FOO").unwrap(), "bar");
        assert_eq!(env.var("BAZ").unwrap(), "qux");
    }

    #[test]
    fn mock_env_returns_not_present_for_missing() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("NONEXISTENT").is_err());
    }

    #[test]
    fn mock_env_ignores_process_environment() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(!env.is_set("CARGO_MANIFEST_DIR"));
    }

    #[test]
    fn is_set_checks_presence() {
        let env = Env::mock([("PRESENT", "value")]);
        assert!(env.is_set("PRESENT"));
        assert!(!env.is_set("ABSENT"));
    }

    #[test]
    fn from_dotenv_parses_comments_and_quotes() {
        let text = "# header\nFOO=bar\n\nQUOTED=\"two words\"\n";
        let env = Env::from_dotenv(text.as_bytes()).unwrap();
        assert_eq!(env.var("FOO").unwrap(), "bar");
        assert_eq!(env.var("QUOTED").unwrap(), "two words");
        assert!(!env.is_set("CARGO_MANIFEST_DIR"));
    }

    #[test]
    fn with_dotenv_missing_file_behaves_like_real() {
        let dir = tempfile::tempdir().unwrap();
        let env = Env::with_dotenv(&dir.path().join(".env")).unwrap();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
        assert!(!env.is_set("FINNEXUS_TEST_SURELY_UNSET"));
    }

    #[test]
    fn with_dotenv_falls_back_to_file_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "FINNEXUS_TEST_FROM_FILE=yes\n").unwrap();

        let env = Env::with_dotenv(&path).unwrap();
        assert_eq!(env.var("FINNEXUS_TEST_FROM_FILE").unwrap(), "yes");
    }

    #[test]
    fn with_dotenv_process_environment_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "CARGO_MANIFEST_DIR=/from/file\n").unwrap();

        let env = Env::with_dotenv(&path).unwrap();
        assert_ne!(env.var("CARGO_MANIFEST_DIR").unwrap(), "/from/file");
    }

    #[test]
    fn with_dotenv_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "KEY=unquoted value with spaces\n").unwrap();

        let err = Env::with_dotenv(&path).unwrap_err();
        assert!(matches!(err, EnvError::ParseFile { .. }));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn dotenv_only_ignores_process_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        assert!(!Env::dotenv_only(&path).unwrap().is_set("CARGO_MANIFEST_DIR"));

        std::fs::write(&path, "FOO=bar\n").unwrap();
        let env = Env::dotenv_only(&path).unwrap();
        assert_eq!(env.var("FOO").unwrap(), "bar");
        assert!(!env.is_set("CARGO_MANIFEST_DIR"));
    }

    #[test]
    fn debug_output_hides_values() {
        let env = Env::mock([("SECRET", "hunter2")]);
        let rendered = format!("{env:?}");
        assert!(rendered.contains("SECRET"));
        assert!(!rendered.contains("hunter2"));
    }
}
