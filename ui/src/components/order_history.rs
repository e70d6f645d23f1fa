use dioxus::prelude::*;

use myshop_common::dashboard::order_rows;
use myshop_common::order::Order;

use super::feedback::Message;

/// Search box above the order history. It stays visible while loading,
/// on error, and when there are no orders.
#[component]
pub fn OrderSearch(
    search: String,
    on_search: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let has_search = !search.is_empty();

    rsx! {
        div { class: "search-bar",
            span { class: "search-icon", "🔍" }
            input {
                r#type: "text",
                placeholder: "Search by order ID or date...",
                value: "{search}",
                oninput: move |evt| on_search.call(evt.value()),
            }
            if has_search {
                button {
                    class: "search-clear",
                    onclick: move |_| on_clear.call(()),
                    "Clear"
                }
            }
        }
    }
}

/// Table of every order on the account matching `search`.
#[component]
pub fn OrderHistory(orders: Vec<Order>, search: String) -> Element {
    if orders.is_empty() {
        return rsx! {
            Message { variant: "info", "You have no orders yet." }
        };
    }

    let rows = order_rows(&orders, &search);

    rsx! {
        div { class: "order-history",
            if rows.is_empty() {
                Message { variant: "info", "No matching orders found." }
            } else {
                table { class: "order-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "DATE" }
                            th { "ITEMS" }
                            th { "TOTAL" }
                            th { "PAID" }
                            th { "DELIVERED" }
                            th {}
                        }
                    }
                    tbody {
                        {rows.into_iter().map(|row| {
                            rsx! {
                                tr { key: "{row.id}",
                                    td { class: "order-id", title: "{row.id}", "{row.short_id}" }
                                    td { "{row.date}" }
                                    td { "{row.items}" }
                                    td { "{row.total}" }
                                    td {
                                        if let Some(date) = &row.paid {
                                            span { class: "state-yes", "{date}" }
                                        } else {
                                            span { class: "state-no", "✗" }
                                        }
                                    }
                                    td {
                                        if let Some(date) = &row.delivered {
                                            span { class: "state-yes", "{date}" }
                                        } else {
                                            span { class: "state-no", "✗" }
                                        }
                                    }
                                    td {
                                        a { class: "button button-small", href: "{row.detail_route}", "View" }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
