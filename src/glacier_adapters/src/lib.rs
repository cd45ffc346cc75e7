//! Infrastructure adapters for the glacier user service.
//!
//! - [`http`]: axum routes translating requests into use case calls
//! - [`persistence`]: implementations of the `UserRepository` port
//! - [`config`]: layered service settings

pub mod config;
pub mod http;
pub mod persistence;
