use dioxus::prelude::*;

use crate::components::forms::SignUpForm;
use crate::features::signup::AuthSessionStore;

const BLOG_CSS: Asset = asset!("/assets/styling/blog.css");

#[component]
pub fn SignUpPage() -> Element {
    // Read once; a sign-up on this page shows its own confirmation
    let mut stored_user = use_signal(|| AuthSessionStore::load_user().ok());

    rsx! {
        document::Link { rel: "stylesheet", href: BLOG_CSS }

        div {
            class: "page-container sign-up-page",
            h1 { class: "page-title", "Create your account" }

            if let Some(user) = stored_user() {
                div {
                    class: "session-notice",
                    "You are already signed in as {user.email}. "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| {
                            AuthSessionStore::clear();
                            stored_user.set(None);
                        },
                        "Not you? Sign out"
                    }
                }
            }

            SignUpForm {}
        }
    }
}
