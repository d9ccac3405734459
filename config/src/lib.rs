use std::{
    env,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

mod error;

pub mod run;

pub use error::Error;
pub use run::RunConfig;

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
const CONFIG_ENV_PREFIX: &str = "FACTORIAL";

/// Overrides the location of the dotenv file read by [`Config::from_env`].
pub const CONFIG_ENV_PATH_VAR: &str = "FACTORIAL_CONFIG_ENV";

/// A configuration section read from `FACTORIAL_<PREFIX>_*` environment variables.
///
/// Fields missing from the environment fall back to the section's serde defaults.
pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        Self::from_env_file(config_env_path())
    }

    /// Loads `path` as a dotenv file first. Variables already present in the process
    /// environment take precedence over the file, and a missing file is skipped.
    fn from_env_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded config env file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);
        Ok(config::Config::builder()
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}

/// `$FACTORIAL_CONFIG_ENV` if set, `.config.env` in this crate's manifest dir otherwise.
#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    env::var_os(CONFIG_ENV_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(CARGO_MANIFEST_DIR).join(".config.env"))
}
