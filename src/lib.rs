//! hello-ec2: a single-route greeting service.
//!
//! Serves a fixed plain-text greeting at `/` and nothing else. The library
//! exposes the router and server pieces so they can be driven from tests.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
