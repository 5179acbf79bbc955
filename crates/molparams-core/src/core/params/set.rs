use super::parameter::{Parameter, ParameterError};
use crate::core::value::Value;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::io;
use std::ops::Index;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
    #[error("Duplicate parameter name '{0}' in collection")]
    DuplicateName(String),

    #[error("Parameter '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Parameter(#[from] ParameterError),
}

/// An ordered collection of parameters keyed by name.
///
/// Iteration follows insertion order. Lookup is by name through [`get`](Self::get)
/// or indexing; the generated technique sets add one named accessor per parameter
/// on top of this type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    params: Vec<Parameter>,
    index: HashMap<String, usize>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from an ordered sequence, rejecting duplicate names.
    pub fn from_params<I>(params: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Parameter>,
    {
        let mut set = Self::new();
        for param in params {
            set.insert(param)?;
        }
        Ok(set)
    }

    /// Builds a set where a later parameter replaces an earlier one of the same name.
    ///
    /// The replacement keeps the position of the first occurrence.
    pub fn with_overrides<I>(params: I) -> Self
    where
        I: IntoIterator<Item = Parameter>,
    {
        let mut set = Self::new();
        for param in params {
            if let Some(replaced) = set.upsert(param) {
                warn!(
                    parameter = replaced.name(),
                    "Duplicate parameter name; the later definition replaces the earlier one."
                );
            }
        }
        set
    }

    pub fn insert(&mut self, param: Parameter) -> Result<(), CollectionError> {
        if self.index.contains_key(param.name()) {
            return Err(CollectionError::DuplicateName(param.name().to_string()));
        }
        self.upsert(param);
        Ok(())
    }

    fn upsert(&mut self, param: Parameter) -> Option<Parameter> {
        match self.index.get(param.name()) {
            Some(&slot) => Some(std::mem::replace(&mut self.params[slot], param)),
            None => {
                self.index.insert(param.name().to_string(), self.params.len());
                self.params.push(param);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&slot| &self.params[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.index.get(name).map(|&slot| &mut self.params[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(Parameter::name)
    }

    pub fn bind(&mut self, name: &str, value: impl Into<Value>) -> Result<(), CollectionError> {
        let param = self
            .get_mut(name)
            .ok_or_else(|| CollectionError::NotFound(name.to_string()))?;
        param.bind(value)?;
        Ok(())
    }

    /// Clears every bound value so that each parameter reports its default again.
    pub fn reset(&mut self) {
        debug!(count = self.params.len(), "Resetting parameter values to defaults.");
        self.params.iter_mut().for_each(Parameter::reset);
    }

    pub fn effective_values(&self) -> Vec<(&str, &Value)> {
        self.params
            .iter()
            .map(|p| (p.name(), p.effective()))
            .collect()
    }

    /// Writes one CSV row per descriptor, in insertion order.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for param in &self.params {
            wtr.serialize(DescriptorRow::from(param))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl Index<&str> for ParameterSet {
    type Output = Parameter;

    fn index(&self, name: &str) -> &Parameter {
        self.get(name)
            .unwrap_or_else(|| panic!("no parameter named '{}'", name))
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Serializes as a sequence of descriptors in insertion order.
///
/// TOML cannot hold a bare array as a document, so write a set under a key
/// (it becomes an array of tables) or use a format that accepts sequences.
impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.params)
    }
}

#[derive(Serialize)]
struct DescriptorRow<'a> {
    name: &'a str,
    display_name: &'a str,
    kind: &'static str,
    units: &'static str,
    default: String,
    choices: String,
    select_multiple: bool,
    help_url: &'a str,
}

impl<'a> From<&'a Parameter> for DescriptorRow<'a> {
    fn from(p: &'a Parameter) -> Self {
        Self {
            name: p.name(),
            display_name: p.display_name(),
            kind: p.value_kind().map_or("", |k| k.name()),
            units: p.units().map_or("", |u| u.symbol()),
            default: p.default().to_string(),
            choices: p
                .choices()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("|"),
            select_multiple: p.is_select_multiple(),
            help_url: p.help_url().unwrap_or(""),
        }
    }
}
