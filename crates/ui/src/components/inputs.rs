//! # Input Components
//!
//! Form input components for the Product Manager UI.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Input type (text, number, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line input bound to a string value
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: "input",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            oninput: move |e| props.on_change.call(e.value()),
        }
    }
}

// ============================================================================
// Button Component
// ============================================================================

/// Visual variant of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button-primary",
            ButtonVariant::Danger => "button button-danger",
            ButtonVariant::Secondary => "button button-secondary",
        }
    }
}

/// Plain button; `submit` makes it submit the enclosing form
#[component]
pub fn Button(
    label: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default = false)] submit: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = variant.class();

    rsx! {
        button {
            class: "{class}",
            r#type: if submit { "submit" } else { "button" },
            onclick: move |e| onclick.call(e),
            "{label}"
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
