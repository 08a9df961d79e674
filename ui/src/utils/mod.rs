//! Cross-cutting helpers
//!
//! - **console_macros**: timestamped browser console logging

pub mod console_macros;
