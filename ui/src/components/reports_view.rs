use dioxus::prelude::*;

#[component]
pub fn ReportsView() -> Element {
    rsx! {
        div { class: "reports-view",
            h3 { class: "panel-title", "Reports" }
            p { class: "empty-state", "Spending and delivery reports will appear here." }
        }
    }
}
