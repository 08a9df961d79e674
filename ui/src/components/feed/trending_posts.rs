use dioxus::prelude::*;

use super::post_card::PostCard;
use crate::features::feed::Post;

#[derive(Props, PartialEq, Clone)]
pub struct TrendingPostsProps {
    /// Posts in display order
    pub posts: Vec<Post>,
}

#[component]
pub fn TrendingPosts(props: TrendingPostsProps) -> Element {
    rsx! {
        div {
            class: "trending-posts",
            h2 { class: "section-title", "Trending" }
            if props.posts.is_empty() {
                p { class: "feed-empty", "Nothing trending right now." }
            } else {
                ol {
                    class: "trending-list",
                    for post in props.posts.iter() {
                        li {
                            key: "{post.id}",
                            PostCard { post: post.clone(), compact: true }
                        }
                    }
                }
            }
        }
    }
}
