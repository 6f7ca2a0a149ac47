//! sitehost - a small static-site HTTP server
//!
//! Serves the files under a single root directory over HTTP/1.1 and nothing
//! else. The serving contract is deliberately narrow: 200 with the file's
//! bytes, 403 for paths that escape the root, 404 for everything that is not
//! a readable file under it.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use server::{ServerHandle, StaticServer};
