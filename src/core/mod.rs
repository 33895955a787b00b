//! Core library components.
//!
//! Value resolution, signing selection and configuration handling. Nothing
//! here prints; the CLI layer owns all output.

pub mod build;
pub mod config;
pub mod constants;
pub mod domain;
pub mod lookup;
pub mod resolver;
pub mod signing;
