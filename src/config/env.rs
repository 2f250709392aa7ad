use std::env;
use std::path::Path;
use std::sync::Once;

use tracing::{debug, warn};

pub const MONGODB_URI_VAR: &str = "MONGODB_URI";

static DOTENV: Once = Once::new();

pub fn load_dotenv() {
    DOTENV.call_once(|| match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    });
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub mongodb_uri: Option<String>,
}

impl EnvConfig {
    pub fn load() -> Self {
        load_dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            mongodb_uri: env::var(MONGODB_URI_VAR).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Parses a `.env` file without touching the process environment.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, dotenvy::Error> {
        let mut config = Self::default();

        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            if key == MONGODB_URI_VAR {
                config.mongodb_uri = Some(value).filter(|v| !v.is_empty());
            }
        }

        Ok(config)
    }

    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            mongodb_uri: Some(uri.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_path_reads_uri() {
        let file = env_file("OTHER=1\nMONGODB_URI=mongodb://from-file:27017\n");

        let config = EnvConfig::from_path(file.path()).unwrap();
        assert_eq!(config.mongodb_uri.as_deref(), Some("mongodb://from-file:27017"));
    }

    #[test]
    fn test_from_path_empty_value_is_unset() {
        let file = env_file("MONGODB_URI=\n");

        let config = EnvConfig::from_path(file.path()).unwrap();
        assert_eq!(config, EnvConfig::default());
    }

    #[test]
    fn test_from_path_missing_key() {
        let file = env_file("# nothing here\nREDIS_URI=redis://localhost\n");

        let config = EnvConfig::from_path(file.path()).unwrap();
        assert!(config.mongodb_uri.is_none());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = EnvConfig::from_path(dir.path().join(".env")).unwrap_err();
        assert!(err.not_found());
    }

    #[test]
    fn test_load_marks_dotenv_loaded_and_reads_env() {
        assert_eq!(EnvConfig::load(), EnvConfig::from_env());
        assert!(DOTENV.is_completed());
    }
}
