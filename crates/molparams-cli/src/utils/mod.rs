pub mod parser;
pub mod text;
