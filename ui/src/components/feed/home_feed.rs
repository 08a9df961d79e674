use dioxus::prelude::*;

use super::home_feed_posts::HomeFeedPosts;
use super::trending_posts::TrendingPosts;
use crate::features::feed::Post;

#[derive(Props, PartialEq, Clone)]
pub struct HomeFeedProps {
    #[props(default)]
    pub trending: Vec<Post>,
}

/// Trending section above the main feed; the two sections share no data.
///
/// The app has no trending source, so `trending` stays empty unless a
/// caller supplies posts.
#[component]
pub fn HomeFeed(props: HomeFeedProps) -> Element {
    rsx! {
        div {
            class: "home-feed",
            section {
                TrendingPosts { posts: props.trending }
            }
            section {
                HomeFeedPosts {}
            }
        }
    }
}
