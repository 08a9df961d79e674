use dioxus::prelude::*;

use crate::components::feed::HomeFeed;

const BLOG_CSS: Asset = asset!("/assets/styling/blog.css");

#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: BLOG_CSS }

        div {
            class: "page-container",
            HomeFeed {}
        }
    }
}
