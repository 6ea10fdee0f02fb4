use crate::RecordKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("invalid {kind} entry: {reason}")]
    InvalidHostname { kind: &'static str, reason: String },

    #[error("invalid ptr entry: {0}")]
    InvalidAddress(String),

    #[error("empty configuration or invalid keys")]
    Empty,

    #[error("failed to render configuration: {0}")]
    Render(String),
}

impl ConfigError {
    pub(crate) fn invalid_hostname(kind: RecordKind, reason: String) -> Self {
        ConfigError::InvalidHostname {
            kind: kind.as_str(),
            reason,
        }
    }
}
