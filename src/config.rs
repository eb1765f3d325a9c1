// Demo settings: defaults, then an optional TOML file, then environment overrides.
use crate::console::Locale;
use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Names the TOML file to read instead of `pointer-demos.toml`.
pub const CONFIG_ENV: &str = "POINTER_DEMOS_CONFIG";
/// Forces the label language (`en` or `ko`).
pub const LOCALE_ENV: &str = "POINTER_DEMOS_LOCALE";
pub const DEFAULT_CONFIG_FILE: &str = "pointer-demos.toml";

pub const DEFAULT_BUFFER_LEN: usize = 5;
pub const MAX_BUFFER_LEN: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub locale: Locale,
    pub color: bool,
    /// Number of integers requested by the heap demo.
    pub buffer_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            color: true,
            buffer_len: DEFAULT_BUFFER_LEN,
        }
    }
}

/// What a config file may set. Every key is optional; unknown keys are an error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    locale: Option<Locale>,
    color: Option<bool>,
    buffer_len: Option<usize>,
}

impl DemoConfig {
    /// Loads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Builds the configuration, looking variables up through `var`.
    pub fn resolve<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let system_locale = var("LC_ALL")
            .filter(|value| !value.is_empty())
            .or_else(|| var("LANG"));
        if let Some(lang) = system_locale {
            config.locale = Locale::from_system(&lang);
        }

        let file = match var(CONFIG_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                path.exists().then(|| path.to_path_buf())
            }
        };
        if let Some(path) = file {
            config.merge(read_file_config(&path)?);
        }

        if let Some(locale) = var(LOCALE_ENV) {
            config.locale = locale.parse()?;
        }
        if var("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            config.color = false;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(content)?;
        let mut config = Self::default();
        config.merge(file);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge(read_file_config(path)?);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_len == 0 {
            return Err(ConfigError::invalid_value("buffer_len", "must be at least 1"));
        }
        if self.buffer_len > MAX_BUFFER_LEN {
            return Err(ConfigError::invalid_value(
                "buffer_len",
                format!("{} exceeds the maximum of {MAX_BUFFER_LEN}", self.buffer_len),
            ));
        }
        Ok(())
    }

    fn merge(&mut self, file: FileConfig) {
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(buffer_len) = file.buffer_len {
            self.buffer_len = buffer_len;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}
