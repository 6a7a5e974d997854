use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline border",
        }
    }
}

/// Append caller classes to a component's base classes
pub(crate) fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

fn base_classes(variant: ButtonVariant) -> String {
    format!(
        "btn-base inline-flex items-center justify-center transition-all {}",
        variant.class()
    )
}

/// Button with a style variant; page sections style it further through `class`
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Solid)]
    variant: ButtonVariant,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = join_classes(&base_classes(variant), &class);

    view! {
        <button type="button" class=full_classes>
            {children()}
        </button>
    }
}
