//! Backend configuration for the blog front-end
//!
//! Values come from the build environment (`BLOG_FIREBASE_API_KEY`,
//! `BLOG_FIREBASE_PROJECT_ID`, `BLOG_AUTH_BASE_URL`, `BLOG_FIRESTORE_BASE_URL`)
//! and fall back to the public Google endpoints.

use serde::{Deserialize, Serialize};

use crate::services::errors::ConfigError;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_POSTS_COLLECTION: &str = "posts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Web API key of the hosted project
    pub api_key: String,

    /// Project that owns the document database
    pub project_id: String,

    /// Base URL of the Identity Toolkit REST API
    pub auth_base_url: String,

    /// Base URL of the Firestore REST API
    pub firestore_base_url: String,

    /// Collection the home feed reads posts from
    pub posts_collection: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            firestore_base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
            posts_collection: DEFAULT_POSTS_COLLECTION.to_string(),
        }
    }
}

impl AppConfig {
    /// Build configuration from variables captured at compile time
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: option_env!("BLOG_FIREBASE_API_KEY")
                .unwrap_or_default()
                .to_string(),
            project_id: option_env!("BLOG_FIREBASE_PROJECT_ID")
                .unwrap_or_default()
                .to_string(),
            auth_base_url: option_env!("BLOG_AUTH_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.auth_base_url),
            firestore_base_url: option_env!("BLOG_FIRESTORE_BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.firestore_base_url),
            posts_collection: defaults.posts_collection,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "api_key".to_string(),
            });
        }

        if self.project_id.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "project_id".to_string(),
            });
        }

        for (field, url) in [
            ("auth_base_url", &self.auth_base_url),
            ("firestore_base_url", &self.firestore_base_url),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidUrl {
                    field: field.to_string(),
                    value: url.clone(),
                });
            }
        }

        if self.posts_collection.trim().is_empty() || self.posts_collection.contains('/') {
            return Err(ConfigError::Invalid {
                field: "posts_collection".to_string(),
                value: self.posts_collection.clone(),
            });
        }

        Ok(())
    }

    /// Endpoint for an Identity Toolkit `accounts:*` method
    pub fn auth_endpoint(&self, method: &str) -> String {
        format!(
            "{}/accounts:{}?key={}",
            self.auth_base_url.trim_end_matches('/'),
            method,
            self.api_key
        )
    }

    /// Endpoint listing the documents of the posts collection
    pub fn posts_endpoint(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.firestore_base_url.trim_end_matches('/'),
            self.project_id,
            self.posts_collection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            api_key: "test-key".to_string(),
            project_id: "blog-test".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_defaults_point_at_public_endpoints() {
        let config = AppConfig::default();
        assert_eq!(config.auth_base_url, DEFAULT_AUTH_BASE_URL);
        assert_eq!(config.firestore_base_url, DEFAULT_FIRESTORE_BASE_URL);
        assert_eq!(config.posts_collection, "posts");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let config = AppConfig {
            api_key: "  ".to_string(),
            ..valid_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Missing {
                field: "api_key".to_string()
            })
        );
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let config = AppConfig {
            firestore_base_url: "firestore.googleapis.com".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { ref field, .. }) if field == "firestore_base_url"
        ));
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(valid_config().validate(), Ok(()));
    }

    #[test]
    fn test_endpoints() {
        let config = AppConfig {
            auth_base_url: "http://localhost:9099/identitytoolkit.googleapis.com/v1/".to_string(),
            ..valid_config()
        };
        assert_eq!(
            config.auth_endpoint("signUp"),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signUp?key=test-key"
        );
        assert_eq!(
            config.posts_endpoint(),
            "https://firestore.googleapis.com/v1/projects/blog-test/databases/(default)/documents/posts"
        );
    }
}
