// Shared kernel: cross-module value objects, errors and utilities

pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
