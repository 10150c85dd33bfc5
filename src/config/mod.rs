//! Worker configuration.
//!
//! Settings come from an optional YAML file, then command-line flags and
//! environment variables override individual keys:
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use conveyor::config::{parse_config, validate, ConfigOverrides};
//! use std::path::Path;
//!
//! let mut config = parse_config("root_dir: /srv/work", Path::new("worker.yml")).unwrap();
//! config.apply(ConfigOverrides {
//!     response_url: Some("https://ci.example.com/results".to_string()),
//!     ..Default::default()
//! });
//! validate(&config).unwrap();
//! assert_eq!(config.shell, "/bin/sh");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{ConfigOverrides, WorkerConfig};
pub use validator::validate;
