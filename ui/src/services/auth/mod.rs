// Client-side account creation against the hosted authentication backend.
//
// - codes: closed set of backend failure codes the UI understands
// - errors: coded rejection type
// - types: REST request/response bodies and the signed-in user
// - client: `AuthClient` trait and its Identity Toolkit implementation

pub mod client;
pub mod codes;
pub mod errors;
pub mod types;

pub use client::{create_account_with_profile, AuthClient, FirebaseAuthClient};
pub use codes::AuthErrorCode;
pub use errors::{AuthError, AuthResult};
pub use types::AuthUser;
