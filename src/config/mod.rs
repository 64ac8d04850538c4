//! Configuration management module.
//!
//! This module loads the optional configuration file naming the dataset
//! source, the dataset mode and the colour theme. Command line flags override
//! whatever the file says.

mod error;

pub use error::ConfigError;

use crate::catalog::Mode;
use crate::dataset::Source;
use crate::error::AppError;
use crate::ui::DEFAULT_THEME;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/showcase-tui";

/// Oversees the session configuration.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub source: Option<String>,
    pub mode: Mode,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_theme_name() -> String {
    DEFAULT_THEME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding defaults.
    ///
    pub fn new() -> Config {
        Config {
            source: None,
            mode: Mode::default(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided,
    /// otherwise from the default directory. A missing file keeps defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };
        let file_path = dir_path.join(Path::new(FILE_NAME));

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply_file(&contents)?;
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Override values from the contents of a configuration file.
    ///
    fn apply_file(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.source = data.source.filter(|s| !s.trim().is_empty());
        self.mode = data.mode;
        self.theme_name = data.theme_name;
        Ok(())
    }

    /// Return the path of the configuration file considered by `load`.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Set the mode from a command line value.
    ///
    pub fn set_mode(&mut self, mode: &str) -> Result<(), ConfigError> {
        self.mode = mode.parse()?;
        Ok(())
    }

    /// Return where the dataset should be read from: the configured source,
    /// or the file conventionally published for the current mode.
    ///
    pub fn dataset_source(&self) -> Source {
        match &self.source {
            Some(source) => Source::parse(source),
            None => Source::parse(self.mode.default_file_name()),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.source, None);
        assert_eq!(config.mode, Mode::Individual);
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(
            config.dataset_source(),
            Source::Local(PathBuf::from("dados_individuais.txt"))
        );
    }

    #[test]
    fn load_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.mode, Mode::Individual);
        assert_eq!(config.file_path(), Some(dir.path().join(FILE_NAME).as_path()));
        assert!(!dir.path().join(FILE_NAME).exists());
    }

    #[test]
    fn load_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "source: https://escola.test/dados_grupos.txt\nmode: grupos\ntheme_name: dracula\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.mode, Mode::Group);
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(
            config.dataset_source(),
            Source::Remote("https://escola.test/dados_grupos.txt".to_string())
        );
    }

    #[test]
    fn load_partial_file_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "mode: group\n").unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(
            config.dataset_source(),
            Source::Local(PathBuf::from("dados_grupos.txt"))
        );
    }

    #[test]
    fn load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "mode: [not, a, mode]\n").unwrap();
        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn set_mode() {
        let mut config = Config::new();
        config.set_mode("group").unwrap();
        assert_eq!(config.mode, Mode::Group);
        assert!(matches!(
            config.set_mode("teams"),
            Err(ConfigError::InvalidMode(_))
        ));
        assert_eq!(config.mode, Mode::Group);
    }
}
