//! HTTP protocol layer module
//!
//! MIME lookup and response builders, decoupled from path resolution.

pub mod mime;
pub mod response;

pub use response::{build_403_response, build_404_response, build_file_response};
