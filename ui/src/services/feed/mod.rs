pub mod client;
pub mod firestore;

pub use client::{collect_all_posts, DocumentPages, FeedClient, FirestoreFeedClient};
