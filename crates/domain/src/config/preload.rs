use super::errors::ConfigError;
use crate::validators::{validate_fqdn, validate_ip_addr};
use crate::RecordKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names to preload, grouped by record kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryType {
    /// Names queried for A and AAAA records
    #[serde(default)]
    pub hosts: Vec<String>,

    #[serde(default)]
    pub cname: Vec<String>,

    #[serde(default)]
    pub ns: Vec<String>,

    #[serde(default)]
    pub mx: Vec<String>,

    #[serde(default)]
    pub txt: Vec<String>,

    /// IP literals queried for their reverse name
    #[serde(default)]
    pub ptr: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PreloadConfig {
    #[serde(default)]
    pub query_type: QueryType,
}

impl PreloadConfig {
    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: PreloadConfig =
            serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects malformed entries and a configuration with nothing to preload.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in RecordKind::ALL {
            for subject in self.subjects(kind) {
                match kind {
                    RecordKind::Ptr => {
                        validate_ip_addr(subject).map_err(ConfigError::InvalidAddress)?;
                    }
                    _ => {
                        validate_fqdn(subject)
                            .map_err(|reason| ConfigError::invalid_hostname(kind, reason))?;
                    }
                }
            }
        }

        if self.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(())
    }

    pub fn subjects(&self, kind: RecordKind) -> &[String] {
        let q = &self.query_type;
        match kind {
            RecordKind::Hosts => &q.hosts,
            RecordKind::Cname => &q.cname,
            RecordKind::Mx => &q.mx,
            RecordKind::Ns => &q.ns,
            RecordKind::Txt => &q.txt,
            RecordKind::Ptr => &q.ptr,
        }
    }

    pub fn count(&self, kind: RecordKind) -> usize {
        self.subjects(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        RecordKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }

    /// YAML document of an empty configuration, used as a starting template.
    pub fn empty_template() -> Result<String, ConfigError> {
        let yaml = serde_yaml::to_string(&PreloadConfig::default())
            .map_err(|e| ConfigError::Render(e.to_string()))?;
        Ok(format!("---\n{yaml}"))
    }
}
