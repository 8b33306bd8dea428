//! Read-only access to the page configuration on disk
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::from_slice;

use super::types::PageConfig;

const PAGECONFIG_PATH: &str = "pageconfig.json";
pub const CONFIG_ENV: &str = "AUTHOR_PAGE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("No configuration directory available")]
    NoConfigDirectory,
}

#[derive(Clone, Debug, Default)]
pub struct Repository {
    config: PageConfig,
}

impl Repository {
    /// Load the configuration, preferring the file named by
    /// `AUTHOR_PAGE_CONFIG` over the one in the config directory.
    /// Any failure is logged and the defaults are used.
    pub fn new() -> Self {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Ok(PathBuf::from(path)),
            None => config_directory().map(|dir| dir.join(PAGECONFIG_PATH)),
        };
        let config = match path.and_then(|path| read::<PageConfig>(&path)) {
            Ok(Some(config)) => {
                log::debug!("loaded page config {config:?}");
                config
            }
            Ok(None) => PageConfig::default(),
            Err(e) => {
                log::error!("Could not load config: {e}");
                PageConfig::default()
            }
        };
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }
}

fn read<T: DeserializeOwned>(data_path: &Path) -> Result<Option<T>, ConfigError> {
    if !data_path.exists() {
        return Ok(None);
    };
    let data = std::fs::read(data_path).map_err(|source| ConfigError::Read {
        path: data_path.to_path_buf(),
        source,
    })?;
    let obj: T = from_slice(&data).map_err(|source| ConfigError::Parse {
        path: data_path.to_path_buf(),
        source,
    })?;
    Ok(Some(obj))
}

fn config_directory() -> Result<PathBuf, ConfigError> {
    use directories_next::ProjectDirs;
    ProjectDirs::from("com", "stylemac", "byline")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoConfigDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::types::Theme;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PAGECONFIG_PATH);
        let result = read::<PageConfig>(&path).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn reads_overrides() {
        let file = config_file(r#"{ "page_size": 3, "theme": "dark" }"#);
        let config = read::<PageConfig>(file.path()).unwrap().unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.excerpt_threshold, PageConfig::default().excerpt_threshold);
    }

    #[test]
    fn broken_json_is_a_parse_error() {
        let file = config_file("{ page_size: ");
        let error = read::<PageConfig>(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().starts_with("Could not parse"));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = read::<PageConfig>(dir.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
