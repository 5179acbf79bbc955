//! # Properties Module
//!
//! The vocabulary of computed quantities a caller may request from a calculation,
//! and validation of requests against it.
//!
//! Properties fall into three categories, each requested with a different shape:
//!
//! - **Ground state** ([`GROUND_STATE_PROPERTIES`]) - requested as bare keywords.
//! - **Excited state** ([`EXCITED_STATE_PROPERTIES`]) - requested with a list of
//!   adiabatic state indices. Index 0 is the ground state, 1 the first excited
//!   state, and so on, so `state_energies[0]` is the `potential_energy`.
//! - **Multistate** ([`MULTISTATE_PROPERTIES`]) - requested with a list of
//!   unordered pairs of state indices.
//!
//! See [`request::PropertyRequest`] for building and validating requests.

pub mod request;

pub use request::{PropertyRequest, RequestError, RequestTarget, StatePair, ValidatedRequest};

use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;

pub const GROUND_STATE_PROPERTIES: &[&str] = &[
    "potential_energy",
    "forces",
    "dipole_moment",
    "quadrupole_moment",
    "octupole_moment",
    "mulliken_charges",
    "esp_charges",
    "orbitals",
    "orbital_energies",
    "ci_vector",
    "hessian",
    "am1_bcc_charges",
];

pub const EXCITED_STATE_PROPERTIES: &[&str] = &["state_energies", "state_forces", "state_ci_vector"];

pub const MULTISTATE_PROPERTIES: &[&str] = &["transition_dipole", "nacv", "oscillator_strength"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    GroundState,
    ExcitedState,
    Multistate,
}

impl PropertyCategory {
    /// The request shape this category expects.
    pub fn expected_shape(&self) -> &'static str {
        match self {
            PropertyCategory::GroundState => "a bare keyword",
            PropertyCategory::ExcitedState => "a list of state indices",
            PropertyCategory::Multistate => "a list of state pairs",
        }
    }

    pub fn properties(&self) -> &'static [&'static str] {
        match self {
            PropertyCategory::GroundState => GROUND_STATE_PROPERTIES,
            PropertyCategory::ExcitedState => EXCITED_STATE_PROPERTIES,
            PropertyCategory::Multistate => MULTISTATE_PROPERTIES,
        }
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyCategory::GroundState => "ground-state",
            PropertyCategory::ExcitedState => "excited-state",
            PropertyCategory::Multistate => "multistate",
        };
        f.write_str(name)
    }
}

static PROPERTY_CATEGORIES: Map<&'static str, PropertyCategory> = phf_map! {
    "potential_energy" => PropertyCategory::GroundState,
    "forces" => PropertyCategory::GroundState,
    "dipole_moment" => PropertyCategory::GroundState,
    "quadrupole_moment" => PropertyCategory::GroundState,
    "octupole_moment" => PropertyCategory::GroundState,
    "mulliken_charges" => PropertyCategory::GroundState,
    "esp_charges" => PropertyCategory::GroundState,
    "orbitals" => PropertyCategory::GroundState,
    "orbital_energies" => PropertyCategory::GroundState,
    "ci_vector" => PropertyCategory::GroundState,
    "hessian" => PropertyCategory::GroundState,
    "am1_bcc_charges" => PropertyCategory::GroundState,
    "state_energies" => PropertyCategory::ExcitedState,
    "state_forces" => PropertyCategory::ExcitedState,
    "state_ci_vector" => PropertyCategory::ExcitedState,
    "transition_dipole" => PropertyCategory::Multistate,
    "nacv" => PropertyCategory::Multistate,
    "oscillator_strength" => PropertyCategory::Multistate,
};

static GROUND_STATE_EQUIVALENTS: Map<&'static str, &'static str> = phf_map! {
    "state_energies" => "potential_energy",
    "state_forces" => "forces",
    "state_ci_vector" => "ci_vector",
};

pub fn category_of(property: &str) -> Option<PropertyCategory> {
    PROPERTY_CATEGORIES.get(property).copied()
}

/// The ground-state property an excited-state property reduces to at state 0.
pub fn ground_state_equivalent(property: &str) -> Option<&'static str> {
    GROUND_STATE_EQUIVALENTS.get(property).copied()
}
