//! Configuration validation.

use crate::config::schema::WorkerConfig;
use crate::error::{ConveyorError, Result};

/// Check a loaded configuration for values the worker cannot use.
pub fn validate(config: &WorkerConfig) -> Result<()> {
    if config.shell.trim().is_empty() {
        return invalid("shell must not be empty");
    }

    if config.root_dir.as_os_str().is_empty() {
        return invalid("root_dir must not be empty");
    }

    if let Some(url) = &config.response_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return invalid(&format!("response_url must be an http(s) URL, got '{}'", url));
        }
    }

    Ok(())
}

fn invalid(message: &str) -> Result<()> {
    Err(ConveyorError::ConfigValidationError {
        message: message.to_string(),
    })
}
