use crate::abstract_factory::AccessoryArgs;
use crate::error::DemoError;
use crate::family::Family;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Which demo drivers to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoSelection {
    AbstractFactory,
    FactoryMethod,
    #[default]
    All,
}

impl DemoSelection {
    pub fn runs_abstract_factory(self) -> bool {
        matches!(self, DemoSelection::AbstractFactory | DemoSelection::All)
    }

    pub fn runs_factory_method(self) -> bool {
        matches!(self, DemoSelection::FactoryMethod | DemoSelection::All)
    }
}

impl fmt::Display for DemoSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DemoSelection::AbstractFactory => "abstract-factory",
            DemoSelection::FactoryMethod => "factory-method",
            DemoSelection::All => "all",
        })
    }
}

impl FromStr for DemoSelection {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "abstract-factory" => Ok(DemoSelection::AbstractFactory),
            "factory-method" => Ok(DemoSelection::FactoryMethod),
            "all" => Ok(DemoSelection::All),
            _ => Err(DemoError::UnknownDemo(trimmed.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub demo: DemoSelection,
    pub families: Vec<Family>,
    pub accessory: AccessoryArgs,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: DemoSelection::All,
            families: Family::ALL.to_vec(),
            accessory: AccessoryArgs::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.families.is_empty() {
            return Err(ConfigError::invalid_value(
                "families",
                "at least one family is required",
            ));
        }
        if self.accessory.series.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "accessory.series",
                "series must not be empty",
            ));
        }
        if self.accessory.capacity_gb == 0 {
            return Err(ConfigError::invalid_value(
                "accessory.capacity_gb",
                "capacity must be positive",
            ));
        }
        Ok(())
    }
}
