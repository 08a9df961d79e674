use dioxus::prelude::*;
use ui::{BlogServices, HomePage, SignUpPage};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Blog" }

        BlogServices {
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(NavBar)]
    #[route("/")]
    Home {},
    #[route("/signup")]
    SignUp {},
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav {
            class: "nav-bar",
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::SignUp {}, "Sign up" }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        HomePage {}
    }
}

#[component]
fn SignUp() -> Element {
    rsx! {
        SignUpPage {}
    }
}
