use dioxus::prelude::*;

use crate::features::feed::Post;

const EXCERPT_CHARS: usize = 160;

#[derive(Props, PartialEq, Clone)]
pub struct PostCardProps {
    pub post: Post,
    #[props(default)]
    pub compact: bool,
}

#[component]
pub fn PostCard(props: PostCardProps) -> Element {
    let post = &props.post;
    let excerpt = post.excerpt(EXCERPT_CHARS);
    let date = post.published_date();
    let likes = post.likes_label();

    rsx! {
        article {
            class: if props.compact { "post-card compact" } else { "post-card" },
            if !post.thumbnail.is_empty() {
                img {
                    class: "post-thumbnail",
                    src: "{post.thumbnail}",
                    alt: "{post.title}",
                }
            }
            div {
                class: "post-body",
                h3 { class: "post-title", "{post.title}" }
                if !props.compact {
                    p { class: "post-excerpt", "{excerpt}" }
                }
                div {
                    class: "post-meta",
                    span { class: "post-author", "{post.author_uid}" }
                    span { class: "post-date", "{date}" }
                    span { class: "post-likes", "♥ {likes}" }
                }
            }
        }
    }
}
