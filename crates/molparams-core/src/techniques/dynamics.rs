//! Integrator, molecular dynamics, and thermostat parameter sets.

use crate::core::units::{
    DEFAULT_TEMPERATURE, DEFAULT_TIME, FEMTOSECOND, KELVIN, PER_PICOSECOND, PICOSECOND,
};
use crate::core::value::ValueKind;
use crate::parameter_set;

parameter_set! {
    pub struct IntegratorParameters {
        timestep
            .with_description("Dynamics timestep")
            .with_default(1.0 * FEMTOSECOND)
            .with_type(DEFAULT_TIME),
        frame_interval
            .with_description("Time between frames")
            .with_default(1.0 * PICOSECOND)
            .with_type(FEMTOSECOND),
    }
}

parameter_set! {
    /// Center-of-mass motion removal and constraint flags for MD runs.
    pub struct MdParameters {
        remove_translation
            .with_description("Remove global translations")
            .with_default(true)
            .with_type(ValueKind::Bool),
        constrain_hbonds
            .with_description("Constrain covalent hydrogen bonds")
            .with_default(true)
            .with_type(ValueKind::Bool),
        constrain_water
            .with_description("Constrain water geometries")
            .with_default(true)
            .with_type(ValueKind::Bool),
        remove_rotation
            .with_description("Remove global rotations")
            .with_default(false)
            .with_type(ValueKind::Bool),
    }
}

parameter_set! {
    pub struct ConstantTempParameters {
        temperature
            .with_description("Thermostat temperature")
            .with_default(298.0 * KELVIN)
            .with_type(DEFAULT_TEMPERATURE),
    }
}

parameter_set! {
    pub struct LangevinParameters {
        collision_rate
            .with_description("Thermal collision rate")
            .with_default(1.0 * PER_PICOSECOND)
            .with_type(PER_PICOSECOND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::ParameterError;
    use crate::core::units::Dimension;
    use crate::core::value::Value;

    #[test]
    fn integrator_times_are_recorded_in_femtoseconds() {
        let params = IntegratorParameters::new();
        assert_eq!(params.timestep().units(), Some(FEMTOSECOND));
        assert_eq!(params.timestep().default(), &Value::Quantity(1.0 * FEMTOSECOND));
        assert_eq!(params.frame_interval().units(), Some(FEMTOSECOND));
        assert_eq!(
            params.frame_interval().default(),
            &Value::Quantity(1.0 * PICOSECOND)
        );
    }

    #[test]
    fn md_flags_default_to_removing_translation_only() {
        let params = MdParameters::new();
        let defaults: Vec<_> = params
            .iter()
            .map(|p| (p.name(), p.default().as_bool()))
            .collect();
        assert_eq!(
            defaults,
            vec![
                ("remove_translation", Some(true)),
                ("constrain_hbonds", Some(true)),
                ("constrain_water", Some(true)),
                ("remove_rotation", Some(false)),
            ]
        );
    }

    #[test]
    fn thermostat_temperature_defaults_to_298_kelvin() {
        let params = ConstantTempParameters::new();
        assert_eq!(params.temperature().units(), Some(KELVIN));
        assert_eq!(
            params.temperature().default().as_quantity(),
            Some(298.0 * KELVIN)
        );
    }

    #[test]
    fn collision_rate_is_an_inverse_time() {
        let mut params = LangevinParameters::new();
        assert_eq!(params.collision_rate().units(), Some(PER_PICOSECOND));
        let err = params
            .collision_rate()
            .clone()
            .bind(1.0 * PICOSECOND)
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::DimensionMismatch {
                name: "collision_rate".to_string(),
                expected: Dimension::InverseTime,
                found: Dimension::Time,
            }
        );
        params.bind("collision_rate", "5.0 1/ps").unwrap();
    }
}
