use leptos::prelude::*;

use super::button::join_classes;

/// Plain content card
#[component]
pub fn Card(
    /// Card content
    children: Children,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <div class=join_classes("card", &class)>
            {children()}
        </div>
    }
}
