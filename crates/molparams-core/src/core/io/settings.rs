use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Parameter values read from a TOML settings file, grouped by parameter set.
///
/// ```toml
/// [mm_model]
/// cutoff = "1.2 nm"
/// nonbonded = "pme"
/// ```
///
/// Values are kept as raw TOML until they are bound, because whether `"1.2 nm"` is
/// a quantity or a plain string depends on the parameter it is bound to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Settings {
    sections: BTreeMap<String, BTreeMap<String, toml::Value>>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Unsupported TOML value of type '{0}'")]
    UnsupportedValue(&'static str),
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| SettingsError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn write(&self, path: &Path) -> Result<(), SettingsError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    pub fn set(&mut self, section: &str, name: &str, value: toml::Value) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(name.to_string(), value);
    }

    pub fn get(&self, section: &str, name: &str) -> Option<&toml::Value> {
        self.sections.get(section).and_then(|s| s.get(name))
    }

    /// Overlays `other` on top of `self`; values in `other` win.
    pub fn merge(&mut self, other: Settings) {
        for (section, values) in other.sections {
            self.sections.entry(section).or_default().extend(values);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(BTreeMap::is_empty)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, toml::Value>)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromStr for Settings {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

pub fn value_from_toml(raw: &toml::Value) -> Result<Value, SettingsError> {
    match raw {
        toml::Value::String(s) => Ok(Value::Str(s.clone())),
        toml::Value::Integer(i) => Ok(Value::Int(*i)),
        toml::Value::Float(x) => Ok(Value::Float(*x)),
        toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
        toml::Value::Array(items) => items
            .iter()
            .map(value_from_toml)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        toml::Value::Datetime(_) => Err(SettingsError::UnsupportedValue("datetime")),
        toml::Value::Table(_) => Err(SettingsError::UnsupportedValue("table")),
    }
}

/// Converts a value back to TOML. TOML has no null, so `Value::None` (also inside
/// lists) yields `None` and is left out of written settings.
pub fn value_to_toml(value: &Value) -> Option<toml::Value> {
    match value {
        Value::None => None,
        Value::Bool(b) => Some(toml::Value::Boolean(*b)),
        Value::Int(i) => Some(toml::Value::Integer(*i)),
        Value::Float(x) => Some(toml::Value::Float(*x)),
        Value::Str(s) => Some(toml::Value::String(s.clone())),
        Value::Quantity(q) => Some(toml::Value::String(q.to_string())),
        Value::List(items) => Some(toml::Value::Array(
            items.iter().filter_map(value_to_toml).collect(),
        )),
    }
}
