//! This crate contains all shared UI components for the blog front-end.

pub mod app;
pub use app::{BlogServices, HomePage, SignUpPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
