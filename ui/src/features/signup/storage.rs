use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use crate::services::auth::AuthUser;

pub const AUTH_USER_KEY: &str = "blog_auth_user";

/// Browser persistence of the signed-in user
pub struct AuthSessionStore;

impl AuthSessionStore {
    pub fn store_user(user: &AuthUser) -> Result<(), StorageError> {
        LocalStorage::set(AUTH_USER_KEY, user)
    }

    pub fn load_user() -> Result<AuthUser, StorageError> {
        LocalStorage::get(AUTH_USER_KEY)
    }

    pub fn clear() {
        LocalStorage::delete(AUTH_USER_KEY);
    }
}
