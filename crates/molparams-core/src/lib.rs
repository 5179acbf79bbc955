//! # molparams
//!
//! Parameter descriptors and predefined parameter sets for molecular simulation
//! techniques, plus the vocabulary of computed properties a caller may request.
//!
//! ## Layout
//!
//! - **[`core`](crate::core): The Foundation.** Values, physical units, the [`Parameter`]
//!   descriptor, the ordered [`ParameterSet`] collection, and TOML settings I/O.
//!
//! - **[`techniques`]: The Predefined Sets.** Model, MM model, QM model, integrator,
//!   molecular dynamics, constant temperature, and Langevin parameter sets, owned
//!   together by a [`TechniqueCatalog`].
//!
//! - **[`properties`]: The Request Vocabulary.** Ground-state, excited-state, and
//!   multistate property names, and validation of [`PropertyRequest`]s against them.
//!
//! [`Parameter`]: crate::core::params::Parameter
//! [`ParameterSet`]: crate::core::params::ParameterSet
//! [`TechniqueCatalog`]: crate::techniques::TechniqueCatalog
//! [`PropertyRequest`]: crate::properties::PropertyRequest

pub mod core;
pub mod properties;
pub mod techniques;
