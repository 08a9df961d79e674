//! Infrastructure Services
//!
//! - **auth**: account creation against the hosted authentication backend
//! - **feed**: post listing from the hosted document database
//! - **config**: backend configuration and global settings
//! - **errors**: feed and configuration error types
//!
//! The services are WASM-first: async traits are declared without Send
//! bounds and HTTP goes through reqwest's browser fetch backend.

pub mod auth;
pub mod config;
pub mod errors;
pub mod feed;
