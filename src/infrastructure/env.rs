use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::domain::env_store::EnvStore;

/// The real process environment.
///
/// Values that are not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                debug!(key, "ignoring non-unicode value");
                None
            }
        }
    }
}

/// Populates the process environment from a `.env` file.
///
/// With no path, searches for `.env` from the current directory upward.
/// Variables already set in the process are not overridden. A missing file is
/// not an error and yields `Ok(None)`.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => {
            info!(path = %path.display(), "loaded env file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => {
            match path {
                Some(path) => warn!(path = %path.display(), "env file not found"),
                None => debug!("no env file found"),
            }
            Ok(None)
        }
        Err(e) => {
            let target = path.map_or_else(|| ".env".to_string(), |p| p.display().to_string());
            Err(e).context(format!("Failed to load env file: {}", target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_process_env_reads_variables() {
        temp_env::with_vars(
            [
                ("ENVCHECK_TEST_PRESENT", Some("value")),
                ("ENVCHECK_TEST_ABSENT", None),
            ],
            || {
                assert_eq!(
                    ProcessEnv.var("ENVCHECK_TEST_PRESENT"),
                    Some("value".to_string())
                );
                assert_eq!(ProcessEnv.var("ENVCHECK_TEST_ABSENT"), None);
            },
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_absent() {
        use crate::application::load_and_validate_config;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let value = OsStr::from_bytes(b"\xff\xfe");
        temp_env::with_var("ENVCHECK_TEST_NON_UNICODE", Some(value), || {
            assert_eq!(ProcessEnv.var("ENVCHECK_TEST_NON_UNICODE"), None);

            let err = load_and_validate_config(&["ENVCHECK_TEST_NON_UNICODE"]).unwrap_err();
            assert_eq!(err.missing(), ["ENVCHECK_TEST_NON_UNICODE".to_string()]);
        });
    }

    #[test]
    fn test_load_env_file_populates_process() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ENVCHECK_TEST_FROM_FILE=from-file").unwrap();

        temp_env::with_var_unset("ENVCHECK_TEST_FROM_FILE", || {
            let loaded = load_env_file(Some(file.path())).unwrap();
            assert_eq!(loaded.as_deref(), Some(file.path()));
            assert_eq!(
                ProcessEnv.var("ENVCHECK_TEST_FROM_FILE"),
                Some("from-file".to_string())
            );
        });
    }

    #[test]
    fn test_load_env_file_keeps_existing_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ENVCHECK_TEST_PRESET=from-file").unwrap();

        temp_env::with_var("ENVCHECK_TEST_PRESET", Some("from-process"), || {
            load_env_file(Some(file.path())).unwrap();
            assert_eq!(
                ProcessEnv.var("ENVCHECK_TEST_PRESET"),
                Some("from-process".to_string())
            );
        });
    }

    #[test]
    fn test_missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_env_file(Some(&dir.path().join("absent.env"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_env_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT A VALID LINE").unwrap();

        let err = load_env_file(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to load env file"));
    }
}
