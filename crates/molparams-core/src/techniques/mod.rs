//! # Techniques Module
//!
//! The predefined parameter sets consumed by simulation backends, and the
//! [`TechniqueCatalog`] that owns one instance of each.
//!
//! ## Sets
//!
//! | Id              | Type                       | Parameters |
//! |-----------------|----------------------------|------------|
//! | `model`         | [`ModelParameters`]        | `subsystem` |
//! | `mm_model`      | [`MmModelParameters`]      | cutoff, nonbonded method, implicit solvent, dielectrics, Ewald tolerance, periodicity |
//! | `qm_model`      | [`QmModelParameters`]      | theory, multiplicity, basis set, symmetry, wavefunction guess |
//! | `integrator`    | [`IntegratorParameters`]   | timestep, frame interval |
//! | `md`            | [`MdParameters`]           | translation/rotation removal, bond/water constraints |
//! | `constant_temp` | [`ConstantTempParameters`] | target temperature |
//! | `langevin`      | [`LangevinParameters`]     | collision rate |
//!
//! The catalog is built explicitly by [`TechniqueCatalog::new`]; there is no global
//! registry. Callers own the catalog and bind user input onto it, either one value at
//! a time or from a [`Settings`] document.

pub mod dynamics;
pub mod mm;
pub mod model;
pub mod qm;

pub use dynamics::{ConstantTempParameters, IntegratorParameters, LangevinParameters, MdParameters};
pub use mm::MmModelParameters;
pub use model::ModelParameters;
pub use qm::QmModelParameters;

use crate::core::io::settings::{self, Settings, SettingsError};
use crate::core::params::{ParameterError, ParameterSet};
use crate::core::value::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Force fields known to the toolkit.
pub const FORCEFIELDS: &[&str] = &[];
/// QM theories known to the toolkit; the `theory` choices.
pub const QM_THEORIES: &[&str] = &[];
/// Basis sets known to the toolkit; the `basis_set` choices.
pub const BASIS_SETS: &[&str] = &[];

/// Admissible `periodic` values: no periodicity, or a periodic box.
pub fn periodicities() -> Vec<Value> {
    vec![Value::Bool(false), Value::from("box")]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetId {
    Model,
    MmModel,
    QmModel,
    Integrator,
    Md,
    ConstantTemp,
    Langevin,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown parameter set '{0}'. Expected one of: {list}", list = SetId::ALL.map(|id| id.as_str()).join(", "))]
pub struct UnknownSetError(pub String);

impl SetId {
    pub const ALL: [SetId; 7] = [
        SetId::Model,
        SetId::MmModel,
        SetId::QmModel,
        SetId::Integrator,
        SetId::Md,
        SetId::ConstantTemp,
        SetId::Langevin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetId::Model => "model",
            SetId::MmModel => "mm_model",
            SetId::QmModel => "qm_model",
            SetId::Integrator => "integrator",
            SetId::Md => "md",
            SetId::ConstantTemp => "constant_temp",
            SetId::Langevin => "langevin",
        }
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetId {
    type Err = UnknownSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('-', "_");
        SetId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| UnknownSetError(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error(transparent)]
    UnknownSet(#[from] UnknownSetError),

    #[error("Unknown parameter '{name}' in set '{set}'")]
    UnknownParameter { set: SetId, name: String },

    #[error("Invalid value for '{set}.{name}': {source}")]
    InvalidValue {
        set: SetId,
        name: String,
        #[source]
        source: ParameterError,
    },

    #[error("Unreadable value for '{set}.{name}': {source}")]
    Settings {
        set: SetId,
        name: String,
        #[source]
        source: SettingsError,
    },
}

/// One owned instance of every predefined parameter set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechniqueCatalog {
    pub model: ModelParameters,
    pub mm_model: MmModelParameters,
    pub qm_model: QmModelParameters,
    pub integrator: IntegratorParameters,
    pub md: MdParameters,
    pub constant_temp: ConstantTempParameters,
    pub langevin: LangevinParameters,
}

impl TechniqueCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            model: ModelParameters::new(),
            mm_model: MmModelParameters::new(),
            qm_model: QmModelParameters::new(),
            integrator: IntegratorParameters::new(),
            md: MdParameters::new(),
            constant_temp: ConstantTempParameters::new(),
            langevin: LangevinParameters::new(),
        };
        debug!(
            sets = SetId::ALL.len(),
            parameters = catalog.iter().map(|(_, set)| set.len()).sum::<usize>(),
            "Technique catalog initialized."
        );
        catalog
    }

    pub fn set(&self, id: SetId) -> &ParameterSet {
        match id {
            SetId::Model => self.model.as_set(),
            SetId::MmModel => self.mm_model.as_set(),
            SetId::QmModel => self.qm_model.as_set(),
            SetId::Integrator => self.integrator.as_set(),
            SetId::Md => self.md.as_set(),
            SetId::ConstantTemp => self.constant_temp.as_set(),
            SetId::Langevin => self.langevin.as_set(),
        }
    }

    pub fn set_mut(&mut self, id: SetId) -> &mut ParameterSet {
        match id {
            SetId::Model => self.model.as_set_mut(),
            SetId::MmModel => self.mm_model.as_set_mut(),
            SetId::QmModel => self.qm_model.as_set_mut(),
            SetId::Integrator => self.integrator.as_set_mut(),
            SetId::Md => self.md.as_set_mut(),
            SetId::ConstantTemp => self.constant_temp.as_set_mut(),
            SetId::Langevin => self.langevin.as_set_mut(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SetId, &ParameterSet)> {
        SetId::ALL.into_iter().map(move |id| (id, self.set(id)))
    }

    pub fn bind(
        &mut self,
        set: SetId,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), BindError> {
        let param = self
            .set_mut(set)
            .get_mut(name)
            .ok_or_else(|| BindError::UnknownParameter {
                set,
                name: name.to_string(),
            })?;
        param.bind(value).map_err(|source| BindError::InvalidValue {
            set,
            name: name.to_string(),
            source,
        })
    }

    /// Binds every value in `settings` or none of them.
    ///
    /// On failure the catalog is left as it was and the first error is returned.
    #[instrument(skip_all, name = "apply_settings")]
    pub fn apply(&mut self, settings: &Settings) -> Result<(), BindError> {
        let mut staged = self.clone();
        let mut count = 0usize;
        for (section, values) in settings.sections() {
            let set: SetId = section.parse()?;
            for (name, raw) in values {
                let value =
                    settings::value_from_toml(raw).map_err(|source| BindError::Settings {
                        set,
                        name: name.clone(),
                        source,
                    })?;
                staged.bind(set, name, value)?;
                count += 1;
            }
        }
        *self = staged;
        info!(count, "Applied settings to technique catalog.");
        Ok(())
    }

    /// Clears every bound value in every set.
    pub fn reset(&mut self) {
        for id in SetId::ALL {
            self.set_mut(id).reset();
        }
    }

    /// Collects the effective value of every parameter into a settings document.
    ///
    /// Parameters whose effective value is `None` are left out, since TOML cannot
    /// express them.
    pub fn effective_settings(&self) -> Settings {
        let mut out = Settings::new();
        for (id, set) in self.iter() {
            for (name, value) in set.effective_values() {
                if let Some(raw) = settings::value_to_toml(value) {
                    out.set(id.as_str(), name, raw);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::{NANOMETER, PICOSECOND};

    #[test]
    fn set_ids_round_trip_through_their_names() {
        for id in SetId::ALL {
            assert_eq!(id.as_str().parse::<SetId>().unwrap(), id);
        }
        assert_eq!("constant-temp".parse::<SetId>().unwrap(), SetId::ConstantTemp);
    }

    #[test]
    fn unknown_set_id_lists_the_valid_names() {
        let err = "thermostat".parse::<SetId>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("thermostat"));
        assert!(message.contains("langevin"));
    }

    #[test]
    fn catalog_holds_all_seven_sets() {
        let catalog = TechniqueCatalog::new();
        let sizes: Vec<_> = catalog.iter().map(|(id, set)| (id, set.len())).collect();
        assert_eq!(
            sizes,
            vec![
                (SetId::Model, 1),
                (SetId::MmModel, 7),
                (SetId::QmModel, 5),
                (SetId::Integrator, 2),
                (SetId::Md, 4),
                (SetId::ConstantTemp, 1),
                (SetId::Langevin, 1),
            ]
        );
    }

    #[test]
    fn periodicity_catalog_matches_the_periodic_choices() {
        let catalog = TechniqueCatalog::new();
        assert_eq!(catalog.mm_model.periodic().choices(), periodicities().as_slice());
        assert!(FORCEFIELDS.is_empty());
    }

    #[test]
    fn bind_names_the_set_and_parameter_on_failure() {
        let mut catalog = TechniqueCatalog::new();
        assert!(matches!(
            catalog.bind(SetId::MmModel, "switch_distance", 0.9),
            Err(BindError::UnknownParameter { set: SetId::MmModel, .. })
        ));

        let err = catalog
            .bind(SetId::QmModel, "wfn_guess", "sad")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for 'qm_model.wfn_guess': Value 'sad' is not an allowed choice for 'wfn_guess' (allowed: huckel, guess)"
        );
    }

    #[test]
    fn apply_binds_values_from_settings() {
        let settings: Settings = r#"
            [mm_model]
            cutoff = "1.2 nm"
            nonbonded = "pme"
            periodic = "box"

            [integrator]
            frame_interval = "2.0 ps"

            [md]
            remove_rotation = true
            "#
        .parse()
        .unwrap();

        let mut catalog = TechniqueCatalog::new();
        catalog.apply(&settings).unwrap();

        assert_eq!(
            catalog.mm_model.cutoff().effective(),
            &Value::Quantity(1.2 * NANOMETER)
        );
        assert_eq!(catalog.mm_model.nonbonded().effective(), &Value::from("pme"));
        assert_eq!(catalog.mm_model.periodic().effective(), &Value::from("box"));
        assert_eq!(
            catalog.integrator.frame_interval().effective(),
            &Value::Quantity(2.0 * PICOSECOND)
        );
        assert_eq!(catalog.md.remove_rotation().effective(), &Value::Bool(true));
    }

    #[test]
    fn apply_fails_on_unknown_sets_and_bad_values() {
        let mut catalog = TechniqueCatalog::new();

        let settings: Settings = "[dft]\nfunctional = \"b3lyp\"\n".parse().unwrap();
        assert!(matches!(
            catalog.apply(&settings),
            Err(BindError::UnknownSet(_))
        ));

        let settings: Settings = "[constant_temp]\ntemperature = \"300 nm\"\n"
            .parse()
            .unwrap();
        assert!(matches!(
            catalog.apply(&settings),
            Err(BindError::InvalidValue {
                set: SetId::ConstantTemp,
                source: ParameterError::DimensionMismatch { .. },
                ..
            })
        ));
    }

    #[test]
    fn failed_apply_leaves_the_catalog_untouched() {
        let mut catalog = TechniqueCatalog::new();
        catalog.bind(SetId::Md, "constrain_water", false).unwrap();
        let before = catalog.clone();

        let settings: Settings = r#"
            [constant_temp]
            temperature = 310

            [mm_model]
            cutoff = "1.2 nm"
            nonbonded = "reaction_field"
            "#
        .parse()
        .unwrap();

        assert!(matches!(
            catalog.apply(&settings),
            Err(BindError::InvalidValue {
                set: SetId::MmModel,
                ..
            })
        ));
        assert_eq!(catalog, before);
        assert_eq!(
            catalog.constant_temp.temperature().effective(),
            TechniqueCatalog::new().constant_temp.temperature().effective()
        );
    }

    #[test]
    fn reset_restores_defaults_everywhere() {
        let mut catalog = TechniqueCatalog::new();
        catalog.bind(SetId::Md, "constrain_water", false).unwrap();
        catalog.bind(SetId::QmModel, "multiplicity", 2_i64).unwrap();
        catalog.reset();
        assert_eq!(catalog, TechniqueCatalog::new());
    }

    #[test]
    fn effective_settings_round_trip_through_apply() {
        let mut catalog = TechniqueCatalog::new();
        catalog.bind(SetId::Langevin, "collision_rate", 2.0).unwrap();
        let dumped = catalog.effective_settings();

        assert_eq!(
            dumped.get("langevin", "collision_rate"),
            Some(&toml::Value::String("2.0 1/ps".to_string()))
        );
        assert_eq!(dumped.get("model", "subsystem"), None);

        let mut fresh = TechniqueCatalog::new();
        fresh.apply(&dumped).unwrap();
        assert_eq!(
            fresh.langevin.collision_rate().effective(),
            catalog.langevin.collision_rate().effective()
        );
    }
}
