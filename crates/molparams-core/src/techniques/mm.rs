use super::periodicities;
use crate::core::units::NANOMETER;
use crate::core::value::{Value, ValueKind};
use crate::parameter_set;

parameter_set! {
    /// Molecular mechanics model parameters.
    pub struct MmModelParameters {
        cutoff
            .with_description("Cutoff for nonbonded interactions")
            .with_default(1.0 * NANOMETER)
            .with_type(NANOMETER),
        nonbonded
            .with_description("Nonbonded interaction method")
            .with_default("cutoff")
            .with_type(ValueKind::Str)
            .with_choices(["cutoff", "pme", "ewald"]),
        implicit_solvent
            .with_description("Implicit solvent method")
            .with_type(ValueKind::Str)
            .with_choices([
                Value::from("gbsa"),
                Value::from("obc"),
                Value::from("pbsa"),
                Value::None,
            ]),
        solute_dielectric
            .with_description("Solute dielectric constant")
            .with_default(1.0)
            .with_type(ValueKind::Float),
        solvent_dielectric
            .with_description("Solvent dielectric constant")
            .with_default(78.5)
            .with_type(ValueKind::Float),
        ewald_error
            .with_description("Ewald error tolerance")
            .with_default(0.0005)
            .with_type(ValueKind::Float),
        periodic
            .with_description("Periodicity")
            .with_default(false)
            .with_choices(periodicities()),
    }
}
