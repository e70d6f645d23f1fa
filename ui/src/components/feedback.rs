use dioxus::prelude::*;

/// Spinner shown while the order query is in flight.
#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", role: "status",
            span { class: "loader-spinner" }
            span { class: "visually-hidden", "Loading..." }
        }
    }
}

/// Alert box. `variant` is one of `info`, `success` or `danger`.
#[component]
pub fn Message(variant: String, children: Element) -> Element {
    rsx! {
        div { class: "message message-{variant}", role: "alert", {children} }
    }
}
