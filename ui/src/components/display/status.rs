use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            role: "status",
            "⏳ {props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ErrorNoticeProps {
    pub message: String,
}

/// Inline error line for a section that failed to load
#[component]
pub fn ErrorNotice(props: ErrorNoticeProps) -> Element {
    rsx! {
        div {
            class: "error-notice",
            role: "alert",
            "✗ {props.message}"
        }
    }
}
