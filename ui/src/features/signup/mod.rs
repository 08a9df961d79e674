//! Account sign-up
//!
//! Field state, the reducer that drives it, and the pure mapping from
//! backend failure codes to per-field messages. The `use_create_account`
//! hook connects the form to the authentication backend.

pub mod hooks;
pub mod request;
pub mod storage;
pub mod types;
pub mod validation;

pub use hooks::{use_create_account, CreateAccountHandle};
pub use request::CreateAccountState;
pub use storage::AuthSessionStore;
pub use types::*;
pub use validation::*;
