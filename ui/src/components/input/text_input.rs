use dioxus::prelude::*;

use crate::features::signup::{field_input_class, FieldError};

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    pub label_text: String,
    pub input_type: InputType,
    pub value: String,
    pub on_change: EventHandler<String>,
    pub error: Option<FieldError>,
    #[props(default)]
    pub required: bool,
    #[props(default = "off".to_string())]
    pub autocomplete: String,
    /// Extra content rendered next to the input, e.g. a visibility toggle
    #[props(default = VNode::empty())]
    pub trailing: Element,
}

/// Labelled input with its inline error message
#[component]
pub fn Input(props: InputProps) -> Element {
    let has_error = props.error.is_some();

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "{props.label_text}"
                div {
                    class: "input-row",
                    input {
                        class: field_input_class(&props.error),
                        r#type: "{props.input_type.as_str()}",
                        value: "{props.value}",
                        required: props.required,
                        autocomplete: "{props.autocomplete}",
                        aria_invalid: "{has_error}",
                        oninput: move |event| props.on_change.call(event.value())
                    }
                    {props.trailing}
                }
            }
            if let Some(error) = &props.error {
                FieldErrorMessage { error: error.clone() }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorMessageProps {
    pub error: FieldError,
}

#[component]
pub fn FieldErrorMessage(props: FieldErrorMessageProps) -> Element {
    rsx! {
        div {
            class: "validation-feedback invalid",
            role: "alert",
            "⚠ {props.error.message}"
        }
    }
}
