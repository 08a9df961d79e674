use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::firestore::{decode_posts, ListDocumentsResponse};
use crate::features::feed::Post;
use crate::services::config::AppConfig;
use crate::services::errors::{FeedError, FeedResult};

/// Page size requested from the document database
pub const POSTS_PAGE_SIZE: u32 = 50;

/// Read access to published posts
#[async_trait(?Send)]
pub trait FeedClient {
    /// All posts of the collection in the order the database returns them
    async fn list_posts(&self) -> FeedResult<Vec<Post>>;
}

/// Source of one page of documents, keyed by page token
#[async_trait(?Send)]
pub trait DocumentPages {
    async fn fetch_page(&self, page_token: Option<&str>) -> FeedResult<ListDocumentsResponse>;
}

/// Follow page tokens until the database reports no further page.
///
/// A missing or empty token ends the listing.
pub async fn collect_all_posts(pages: &dyn DocumentPages) -> FeedResult<Vec<Post>> {
    let mut posts = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = pages.fetch_page(page_token.as_deref()).await?;
        let (decoded, skipped) = decode_posts(&page.documents);

        for error in &skipped {
            warn!("Skipping post: {}", error);
        }
        posts.extend(decoded);

        match page.next_page_token {
            Some(next) if !next.is_empty() => page_token = Some(next),
            _ => break,
        }
    }

    Ok(posts)
}

/// Firestore REST client for the posts collection
#[derive(Clone)]
pub struct FirestoreFeedClient {
    pub(crate) http_client: Client,
    pub(crate) config: AppConfig,
}

impl FirestoreFeedClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl DocumentPages for FirestoreFeedClient {
    #[instrument(skip(self), err)]
    async fn fetch_page(&self, page_token: Option<&str>) -> FeedResult<ListDocumentsResponse> {
        let page_size = POSTS_PAGE_SIZE.to_string();
        let mut query = vec![("key", self.config.api_key.as_str()), ("pageSize", page_size.as_str())];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .http_client
            .get(self.config.posts_endpoint())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait(?Send)]
impl FeedClient for FirestoreFeedClient {
    #[instrument(skip(self), err)]
    async fn list_posts(&self) -> FeedResult<Vec<Post>> {
        let posts = collect_all_posts(self).await?;
        info!("Loaded {} posts", posts.len());
        Ok(posts)
    }
}
