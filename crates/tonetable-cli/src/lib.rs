//! tonetable CLI library.
//!
//! This crate provides the core functionality for the tonetable CLI,
//! including spec loading, table rendering, and the command implementations.

pub mod commands;
pub mod input;
pub mod render;
