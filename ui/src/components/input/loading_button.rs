use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingButtonProps {
    pub loading: bool,
    #[props(default = "submit".to_string())]
    pub button_type: String,
    pub children: Element,
}

/// Button that shows a spinner and ignores clicks while `loading`
#[component]
pub fn LoadingButton(props: LoadingButtonProps) -> Element {
    rsx! {
        button {
            class: if props.loading { "loading-button busy" } else { "loading-button" },
            r#type: "{props.button_type}",
            disabled: props.loading,
            if props.loading {
                span { class: "spinner", "⏳" }
            }
            {props.children}
        }
    }
}
