//! # Core Module
//!
//! The foundation every technique set is built from.
//!
//! ## Architecture
//!
//! - **Units** ([`units`]) - unit tags, quantities, and the known-unit table
//! - **Values** ([`value`]) - the value and value-kind model shared by all parameters
//! - **Descriptors** ([`params`]) - parameter descriptors and ordered named collections
//! - **Settings I/O** ([`io`]) - TOML settings files holding values to bind
//!
//! Nothing here performs unit conversion or talks to a simulation backend. The
//! types are passive metadata that consumers read, validate against, and bind.

pub mod io;
pub mod params;
pub mod units;
pub mod value;
