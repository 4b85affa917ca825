//! HTTP server module.
//!
//! Binds the listening socket, serves the router on it and drains in-flight
//! connections on SIGTERM/SIGINT before returning.

mod server;
pub mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
