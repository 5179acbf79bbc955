//! # Parameter Descriptors
//!
//! This module provides the two building blocks every technique set is made of:
//!
//! - [`Parameter`] - a descriptor bundling a name, display name, declared type
//!   (possibly a physical unit), default, allowed choices, multiplicity flag, and
//!   documentation link, plus a bindable value slot.
//! - [`ParameterSet`] - an ordered, uniquely keyed collection of descriptors.
//!
//! The [`parameter_set!`](crate::parameter_set) macro generates a named wrapper
//! around a [`ParameterSet`] with one accessor method per parameter. Each accessor
//! is named after the parameter it returns, so a duplicated name fails to compile.
//!
//! ```
//! use molparams::core::units::NANOMETER;
//! use molparams::parameter_set;
//!
//! parameter_set! {
//!     pub struct CutoffParameters {
//!         cutoff
//!             .with_description("Cutoff for nonbonded interactions")
//!             .with_default(1.0 * NANOMETER)
//!             .with_type(NANOMETER),
//!     }
//! }
//!
//! let params = CutoffParameters::new();
//! assert_eq!(params.cutoff().display_name(), "Cutoff for nonbonded interactions");
//! assert!(params.contains("cutoff"));
//! ```

pub mod parameter;
pub mod set;

pub use parameter::{ParamType, Parameter, ParameterError, TypeSpec};
pub use set::{CollectionError, ParameterSet};

#[macro_export]
macro_rules! parameter_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident $( . $method:ident ( $( $arg:expr ),* $(,)? ) )*
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            set: $crate::core::params::ParameterSet,
        }

        impl $name {
            pub fn new() -> Self {
                // Accessor names double as parameter names and cannot repeat,
                // so nothing is overwritten here.
                let set = $crate::core::params::ParameterSet::with_overrides([
                    $(
                        $crate::core::params::Parameter::new(stringify!($field))
                            $( .$method( $( $arg ),* ) )*
                    ),*
                ]);
                Self { set }
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> &$crate::core::params::Parameter {
                    &self.set[stringify!($field)]
                }
            )*

            pub fn as_set(&self) -> &$crate::core::params::ParameterSet {
                &self.set
            }

            pub fn as_set_mut(&mut self) -> &mut $crate::core::params::ParameterSet {
                &mut self.set
            }

            pub fn into_set(self) -> $crate::core::params::ParameterSet {
                self.set
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::core::params::ParameterSet;

            fn deref(&self) -> &Self::Target {
                &self.set
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.set
            }
        }
    };
}
