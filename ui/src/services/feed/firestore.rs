//! Decoding of Firestore REST documents into posts
//!
//! Firestore wraps every field in a typed envelope, e.g.
//! `{"title": {"stringValue": "Hello"}, "likes": {"integerValue": "3"}}`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::features::feed::Post;
use crate::services::errors::{FeedError, FeedResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<FirestoreDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreDocument {
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl FirestoreDocument {
    /// Last path segment of the document name
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn typed(&self, field: &str) -> FeedResult<&Map<String, Value>> {
        self.fields
            .get(field)
            .and_then(Value::as_object)
            .ok_or_else(|| FeedError::decode(self.id(), format!("missing field {}", field)))
    }

    fn string(&self, field: &str) -> FeedResult<String> {
        self.typed(field)?
            .get("stringValue")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FeedError::decode(self.id(), format!("{} is not a string", field)))
    }

    fn timestamp(&self, field: &str) -> FeedResult<String> {
        let typed = self.typed(field)?;
        typed
            .get("timestampValue")
            .or_else(|| typed.get("stringValue"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| FeedError::decode(self.id(), format!("{} is not a timestamp", field)))
    }

    fn count(&self, field: &str) -> FeedResult<u64> {
        let typed = self.typed(field)?;
        // integerValue is transported as a decimal string
        let parsed = match (typed.get("integerValue"), typed.get("doubleValue")) {
            (Some(Value::String(raw)), _) => raw.parse::<u64>().ok(),
            (Some(Value::Number(n)), _) => n.as_u64(),
            (None, Some(Value::Number(n))) => n
                .as_f64()
                .filter(|v| *v >= 0.0 && v.fract() == 0.0)
                .map(|v| v as u64),
            _ => None,
        };
        parsed.ok_or_else(|| {
            FeedError::decode(self.id(), format!("{} is not a non-negative integer", field))
        })
    }

    pub fn to_post(&self) -> FeedResult<Post> {
        Ok(Post {
            id: self.id().to_string(),
            title: self.string("title")?,
            blog_contents: self.string("blogContents")?,
            author_uid: self.string("authorUid")?,
            timestamp: self.timestamp("timestamp")?,
            thumbnail: self.string("thumbnail")?,
            likes: self.count("likes")?,
        })
    }
}

/// Decode every document of a page, skipping the ones that do not decode.
pub fn decode_posts(documents: &[FirestoreDocument]) -> (Vec<Post>, Vec<FeedError>) {
    let mut posts = Vec::with_capacity(documents.len());
    let mut skipped = Vec::new();

    for document in documents {
        match document.to_post() {
            Ok(post) => posts.push(post),
            Err(e) => skipped.push(e),
        }
    }

    (posts, skipped)
}
