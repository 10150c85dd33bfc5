//! Configuration file loading.

use crate::config::schema::WorkerConfig;
use crate::error::{ConveyorError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<WorkerConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => Ok(WorkerConfig::default()),
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<WorkerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConveyorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConveyorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into WorkerConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<WorkerConfig> {
    if content.trim().is_empty() {
        return Ok(WorkerConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ConveyorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn load_config_without_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, WorkerConfig::default());
    }

    #[test]
    fn load_config_file_reads_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("worker.yml");
        fs::write(
            &path,
            "response_url: https://ci.example.com/hook\nroot_dir: /work\ntimeout_secs: 5\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(
            config.response_url.as_deref(),
            Some("https://ci.example.com/hook")
        );
        assert_eq!(config.root_dir, PathBuf::from("/work"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.shell, "/bin/sh");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, ConveyorError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("timeout_secs: [oops", Path::new("bad.yml")).unwrap_err();
        match err {
            ConveyorError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("\n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, WorkerConfig::default());
    }
}
