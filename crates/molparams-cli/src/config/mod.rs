pub mod builder;
pub mod file;

pub use builder::build_catalog;
