//! # I/O Module
//!
//! Reading and writing of TOML settings files that bind values onto parameter sets.
//!
//! - [`settings`] - the [`settings::Settings`] document and TOML value conversions

pub mod settings;
