//! CLI command implementations

pub mod generate;
pub mod hash;
pub mod json_output;
pub mod presets;
pub mod validate;

mod reporting;
