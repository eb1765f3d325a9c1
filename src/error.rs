use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    /// The heap could not hand out storage for `elements` integers.
    #[error("memory allocation failed: no room for {elements} integers")]
    ResourceExhausted { elements: usize },

    #[error("{elements} slots would overflow the i32 slot values")]
    SlotOverflow { elements: usize },

    #[error("refusing to allocate a buffer of zero integers")]
    EmptyBuffer,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write demo output: {0}")]
    Output(#[from] io::Error),
}
