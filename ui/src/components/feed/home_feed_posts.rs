use dioxus::prelude::*;

use super::post_card::PostCard;
use crate::app::AppServices;
use crate::components::display::{ErrorNotice, LoadingIndicator};
use crate::{console_error, console_info};

/// Self-fetching list of posts for the home page
#[component]
pub fn HomeFeedPosts() -> Element {
    let services = use_context::<AppServices>();

    let posts = use_resource(move || {
        let feed = services.feed.clone();
        async move {
            let result = feed.list_posts().await;
            match &result {
                Ok(posts) => console_info!("[HomeFeed] Loaded {} posts", posts.len()),
                Err(e) => console_error!("[HomeFeed] Failed to load posts: {}", e),
            }
            result
        }
    });

    match &*posts.read_unchecked() {
        None => rsx! {
            LoadingIndicator { message: "Loading posts...".to_string() }
        },
        Some(Err(e)) => rsx! {
            ErrorNotice { message: format!("Could not load posts: {}", e) }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "feed-empty", "No posts yet." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "feed-posts",
                for post in list.iter() {
                    PostCard { key: "{post.id}", post: post.clone() }
                }
            }
        },
    }
}
