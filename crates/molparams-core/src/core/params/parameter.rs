//! The parameter descriptor.
//!
//! A [`Parameter`] is passive metadata: a name, a display label, a declared type,
//! a default, and an optional list of admissible choices. Construction never fails
//! and never validates the default against the choices. Enforcement happens only
//! when a consumer binds a value through [`Parameter::bind`].

use crate::core::units::{Dimension, Quantity, Unit, UnitError};
use crate::core::value::{Value, ValueKind};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Parameter '{name}' expects {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: String,
        found: &'static str,
    },

    #[error("Parameter '{name}' expects a quantity of {expected}, got one of {found}")]
    DimensionMismatch {
        name: String,
        expected: Dimension,
        found: Dimension,
    },

    #[error("Value '{value}' is not an allowed choice for '{name}' (allowed: {allowed})")]
    NotAChoice {
        name: String,
        value: String,
        allowed: String,
    },

    #[error("Parameter '{name}' does not accept multiple selections")]
    MultipleNotAllowed { name: String },

    #[error("Invalid quantity for parameter '{name}': {source}")]
    Quantity {
        name: String,
        #[source]
        source: UnitError,
    },
}

/// The resolved declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum ParamType {
    Primitive(ValueKind),
    /// A physical quantity. Values are floats expressed in the recorded unit.
    Quantity(Unit),
}

impl ParamType {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            ParamType::Primitive(kind) => *kind,
            ParamType::Quantity(_) => ValueKind::Float,
        }
    }

    pub fn unit(&self) -> Option<Unit> {
        match self {
            ParamType::Primitive(_) => None,
            ParamType::Quantity(unit) => Some(*unit),
        }
    }

    fn describe(&self) -> String {
        match self {
            ParamType::Primitive(kind) => kind.name().to_string(),
            ParamType::Quantity(unit) => format!("a quantity in {}", unit),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Primitive(kind) => f.write_str(kind.name()),
            ParamType::Quantity(unit) => write!(f, "quantity [{}]", unit),
        }
    }
}

/// What a caller may pass as a parameter's type.
///
/// Quantities and bare units both collapse to [`ParamType::Quantity`]; only the unit
/// of a quantity is kept, its magnitude is discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeSpec {
    Kind(ValueKind),
    Unit(Unit),
    Quantity(Quantity),
}

impl From<ValueKind> for TypeSpec {
    fn from(kind: ValueKind) -> Self {
        TypeSpec::Kind(kind)
    }
}

impl From<Unit> for TypeSpec {
    fn from(unit: Unit) -> Self {
        TypeSpec::Unit(unit)
    }
}

impl From<Quantity> for TypeSpec {
    fn from(quantity: Quantity) -> Self {
        TypeSpec::Quantity(quantity)
    }
}

impl From<TypeSpec> for ParamType {
    fn from(spec: TypeSpec) -> Self {
        match spec {
            TypeSpec::Kind(kind) => ParamType::Primitive(kind),
            TypeSpec::Unit(unit) => ParamType::Quantity(unit),
            TypeSpec::Quantity(quantity) => ParamType::Quantity(quantity.unit()),
        }
    }
}

/// A method's configurable parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    name: String,
    display_name: String,
    declared_type: Option<ParamType>,
    default: Value,
    choices: Vec<Value>,
    select_multiple: bool,
    help_url: Option<String>,
    #[serde(skip)]
    value: Option<Value>,
}

impl Parameter {
    /// Creates an untyped parameter with no default and no choices.
    ///
    /// The display name falls back to `name` until a description is supplied.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            declared_type: None,
            default: Value::None,
            choices: Vec::new(),
            select_multiple: false,
            help_url: None,
            value: None,
        }
    }

    pub fn with_description(mut self, short_description: impl Into<String>) -> Self {
        self.display_name = short_description.into();
        self
    }

    pub fn with_type(mut self, spec: impl Into<TypeSpec>) -> Self {
        self.declared_type = Some(ParamType::from(spec.into()));
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_select_multiple(mut self, select_multiple: bool) -> Self {
        self.select_multiple = select_multiple;
        self
    }

    pub fn with_help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn declared_type(&self) -> Option<ParamType> {
        self.declared_type
    }

    /// The declared value kind; quantity-typed parameters report `Float`.
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.declared_type.map(|t| t.value_kind())
    }

    pub fn units(&self) -> Option<Unit> {
        self.declared_type.and_then(|t| t.unit())
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn choices(&self) -> &[Value] {
        &self.choices
    }

    pub fn is_select_multiple(&self) -> bool {
        self.select_multiple
    }

    pub fn help_url(&self) -> Option<&str> {
        self.help_url.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    /// The bound value, or the default when nothing is bound.
    pub fn effective(&self) -> &Value {
        self.value.as_ref().unwrap_or(&self.default)
    }

    /// Whether the default is one of the choices. Never enforced; a default outside
    /// the choice set simply has to be overridden before use.
    pub fn default_is_admissible(&self) -> bool {
        self.choices.is_empty() || self.choices.contains(&self.default)
    }

    /// Validates `value` against the declared type and choices, then stores it.
    ///
    /// Bare numbers bound to a quantity-typed parameter are taken to be in the
    /// declared unit, and strings are parsed as quantities. A quantity in another
    /// unit of the same dimension is stored as given.
    pub fn bind(&mut self, value: impl Into<Value>) -> Result<(), ParameterError> {
        let value = self.coerce(value.into())?;
        self.check_choices(&value)?;
        debug!(parameter = %self.name, value = %value, "Bound parameter value.");
        self.value = Some(value);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value = None;
    }

    fn coerce(&self, value: Value) -> Result<Value, ParameterError> {
        match value {
            Value::List(items) => {
                if !self.select_multiple {
                    return Err(ParameterError::MultipleNotAllowed {
                        name: self.name.clone(),
                    });
                }
                items
                    .into_iter()
                    .map(|item| self.coerce_single(item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
            single => self.coerce_single(single),
        }
    }

    fn coerce_single(&self, value: Value) -> Result<Value, ParameterError> {
        let Some(declared) = self.declared_type else {
            return match value {
                Value::List(_) => Err(self.mismatch("a single value", &value)),
                other => Ok(other),
            };
        };

        match (declared, value) {
            (_, Value::None) => Ok(Value::None),
            (ParamType::Quantity(unit), Value::Quantity(q)) => self.check_dimension(unit, q),
            (ParamType::Quantity(unit), Value::Float(x)) => Ok(Value::Quantity(x * unit)),
            (ParamType::Quantity(unit), Value::Int(i)) => Ok(Value::Quantity((i as f64) * unit)),
            (ParamType::Quantity(unit), Value::Str(text)) => {
                let q: Quantity = text.parse().map_err(|source| ParameterError::Quantity {
                    name: self.name.clone(),
                    source,
                })?;
                self.check_dimension(unit, q)
            }
            (ParamType::Primitive(ValueKind::Float), Value::Int(i)) => Ok(Value::Float(i as f64)),
            (ParamType::Primitive(kind), other) if kind.accepts(&other) => Ok(other),
            (declared, other) => Err(self.mismatch(&declared.describe(), &other)),
        }
    }

    fn check_dimension(&self, unit: Unit, q: Quantity) -> Result<Value, ParameterError> {
        if q.unit().is_compatible(&unit) {
            Ok(Value::Quantity(q))
        } else {
            Err(ParameterError::DimensionMismatch {
                name: self.name.clone(),
                expected: unit.dimension(),
                found: q.dimension(),
            })
        }
    }

    fn check_choices(&self, value: &Value) -> Result<(), ParameterError> {
        if self.choices.is_empty() {
            return Ok(());
        }
        let selected: &[Value] = match value {
            Value::List(items) => items,
            single => std::slice::from_ref(single),
        };
        match selected.iter().find(|v| !self.choices.contains(v)) {
            Some(rejected) => Err(ParameterError::NotAChoice {
                name: self.name.clone(),
                value: rejected.to_string(),
                allowed: self
                    .choices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
            None => Ok(()),
        }
    }

    fn mismatch(&self, expected: &str, found: &Value) -> ParameterError {
        ParameterError::TypeMismatch {
            name: self.name.clone(),
            expected: expected.to_string(),
            found: found.type_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{ANGSTROM, FEMTOSECOND, KELVIN, NANOMETER, PICOSECOND};

    fn nonbonded() -> Parameter {
        Parameter::new("nonbonded")
            .with_description("Nonbonded interaction method")
            .with_type(ValueKind::Str)
            .with_default("cutoff")
            .with_choices(["cutoff", "pme", "ewald"])
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let p = Parameter::new("subsystem");
        assert_eq!(p.display_name(), "subsystem");

        let p = Parameter::new("theory").with_description("QM theory");
        assert_eq!(p.display_name(), "QM theory");
    }

    #[test]
    fn quantity_type_collapses_to_float_and_records_unit() {
        let p = Parameter::new("cutoff").with_type(1.0 * NANOMETER);
        assert_eq!(p.value_kind(), Some(ValueKind::Float));
        assert_eq!(p.units(), Some(NANOMETER));
        assert_eq!(p.declared_type(), Some(ParamType::Quantity(NANOMETER)));
    }

    #[test]
    fn bare_unit_type_collapses_to_float_and_records_unit() {
        let p = Parameter::new("timestep").with_type(FEMTOSECOND);
        assert_eq!(p.value_kind(), Some(ValueKind::Float));
        assert_eq!(p.units(), Some(FEMTOSECOND));
        assert_eq!(p.declared_type().unwrap().to_string(), "quantity [fs]");
    }

    #[test]
    fn primitive_and_missing_types_record_no_unit() {
        let p = Parameter::new("multiplicity").with_type(ValueKind::Int);
        assert_eq!(p.declared_type(), Some(ParamType::Primitive(ValueKind::Int)));
        assert_eq!(p.units(), None);

        let p = Parameter::new("subsystem");
        assert_eq!(p.declared_type(), None);
        assert_eq!(p.value_kind(), None);
        assert_eq!(p.units(), None);
    }

    #[test]
    fn omitted_choices_are_an_empty_list() {
        let p = Parameter::new("subsystem");
        assert!(p.choices().is_empty());
        assert!(!p.is_select_multiple());
        assert_eq!(p.help_url(), None);
    }

    #[test]
    fn value_starts_unset_and_effective_falls_back_to_default() {
        let p = nonbonded();
        assert!(!p.is_bound());
        assert_eq!(p.value(), None);
        assert_eq!(p.effective(), &Value::from("cutoff"));
    }

    #[test]
    fn default_outside_choices_is_accepted_at_construction() {
        let p = Parameter::new("wfn_guess")
            .with_default("sad")
            .with_choices(["huckel", "guess"]);
        assert_eq!(p.default(), &Value::from("sad"));
        assert!(!p.default_is_admissible());
        assert!(nonbonded().default_is_admissible());
    }

    #[test]
    fn bind_accepts_a_listed_choice_and_reset_clears_it() {
        let mut p = nonbonded();
        p.bind("pme").unwrap();
        assert_eq!(p.effective(), &Value::from("pme"));

        p.reset();
        assert!(!p.is_bound());
        assert_eq!(p.effective(), &Value::from("cutoff"));
    }

    #[test]
    fn bind_rejects_values_outside_the_choices() {
        let mut p = nonbonded();
        let err = p.bind("reaction-field").unwrap_err();
        assert!(matches!(err, ParameterError::NotAChoice { ref value, .. } if value == "reaction-field"));
        assert!(!p.is_bound());
    }

    #[test]
    fn bind_rejects_values_of_the_wrong_kind() {
        let mut p = nonbonded();
        let err = p.bind(3_i64).unwrap_err();
        assert_eq!(
            err,
            ParameterError::TypeMismatch {
                name: "nonbonded".to_string(),
                expected: "str".to_string(),
                found: "int",
            }
        );
    }

    #[test]
    fn bind_widens_integers_for_float_parameters() {
        let mut p = Parameter::new("solvent_dielectric").with_type(ValueKind::Float);
        p.bind(80_i64).unwrap();
        assert_eq!(p.value(), Some(&Value::Float(80.0)));
    }

    #[test]
    fn bind_interprets_bare_numbers_in_the_declared_unit() {
        let mut p = Parameter::new("cutoff").with_type(NANOMETER);
        p.bind(1.2).unwrap();
        assert_eq!(p.value(), Some(&Value::Quantity(1.2 * NANOMETER)));
    }

    #[test]
    fn bind_keeps_compatible_units_without_converting() {
        let mut p = Parameter::new("cutoff").with_type(NANOMETER);
        p.bind(12.0 * ANGSTROM).unwrap();
        assert_eq!(p.value(), Some(&Value::Quantity(12.0 * ANGSTROM)));

        let mut p = Parameter::new("frame_interval").with_type(FEMTOSECOND);
        p.bind("2.0 ps").unwrap();
        assert_eq!(p.value(), Some(&Value::Quantity(2.0 * PICOSECOND)));
    }

    #[test]
    fn bind_rejects_incompatible_dimensions() {
        let mut p = Parameter::new("temperature").with_type(KELVIN);
        let err = p.bind(1.0 * NANOMETER).unwrap_err();
        assert_eq!(
            err,
            ParameterError::DimensionMismatch {
                name: "temperature".to_string(),
                expected: Dimension::Temperature,
                found: Dimension::Length,
            }
        );
    }

    #[test]
    fn bind_reports_unparseable_quantity_strings() {
        let mut p = Parameter::new("timestep").with_type(FEMTOSECOND);
        let err = p.bind("two fs").unwrap_err();
        assert!(matches!(
            err,
            ParameterError::Quantity {
                source: UnitError::InvalidMagnitude(_),
                ..
            }
        ));
    }

    #[test]
    fn none_passes_the_type_check_but_not_an_exclusive_choice_list() {
        let mut solvent = Parameter::new("implicit_solvent")
            .with_type(ValueKind::Str)
            .with_choices([Value::from("gbsa"), Value::from("obc"), Value::None]);
        solvent.bind(Value::None).unwrap();
        assert_eq!(solvent.value(), Some(&Value::None));

        let mut p = nonbonded();
        assert!(matches!(
            p.bind(Value::None),
            Err(ParameterError::NotAChoice { .. })
        ));
    }

    #[test]
    fn lists_require_select_multiple() {
        let mut p = nonbonded();
        let err = p
            .bind(vec![Value::from("pme"), Value::from("ewald")])
            .unwrap_err();
        assert!(matches!(err, ParameterError::MultipleNotAllowed { .. }));

        let mut p = nonbonded().with_select_multiple(true);
        p.bind(vec![Value::from("pme"), Value::from("ewald")]).unwrap();
        assert!(matches!(p.value(), Some(Value::List(items)) if items.len() == 2));

        let err = p
            .bind(vec![Value::from("pme"), Value::from("pppm")])
            .unwrap_err();
        assert!(matches!(err, ParameterError::NotAChoice { ref value, .. } if value == "pppm"));
    }

    #[test]
    fn untyped_parameters_accept_any_single_value() {
        let mut p = Parameter::new("subsystem");
        p.bind("protein").unwrap();
        p.bind(4_i64).unwrap();
        assert_eq!(p.value(), Some(&Value::Int(4)));
    }

    #[test]
    fn descriptor_exports_without_its_bound_value() {
        let mut p = Parameter::new("cutoff")
            .with_description("Cutoff for nonbonded interactions")
            .with_default(1.0 * NANOMETER)
            .with_type(NANOMETER)
            .with_help_url("https://example.org/cutoff");
        p.bind(1.2 * NANOMETER).unwrap();
        assert_eq!(p.help_url(), Some("https://example.org/cutoff"));

        let text = toml::to_string(&p).unwrap();
        let doc: toml::Table = toml::from_str(&text).unwrap();

        assert_eq!(doc["name"].as_str(), Some("cutoff"));
        assert_eq!(
            doc["display_name"].as_str(),
            Some("Cutoff for nonbonded interactions")
        );
        assert_eq!(doc["default"].as_str(), Some("1.0 nm"));
        assert_eq!(doc["declared_type"]["kind"].as_str(), Some("quantity"));
        assert_eq!(doc["declared_type"]["of"].as_str(), Some("nm"));
        assert_eq!(doc["choices"].as_array().map(Vec::len), Some(0));
        assert_eq!(doc["select_multiple"].as_bool(), Some(false));
        assert_eq!(doc["help_url"].as_str(), Some("https://example.org/cutoff"));
        assert!(!doc.contains_key("value"));
    }

    #[test]
    fn primitive_types_export_their_kind() {
        let text = toml::to_string(&nonbonded()).unwrap();
        let doc: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(doc["declared_type"]["kind"].as_str(), Some("primitive"));
        assert_eq!(doc["declared_type"]["of"].as_str(), Some("str"));
        assert!(!doc.contains_key("help_url"));
    }
}
