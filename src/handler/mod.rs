//! Request handling module
//!
//! Maps request paths onto the serving root and produces responses.

pub mod static_files;

pub use static_files::{handle_request, resolve, Resolution};
