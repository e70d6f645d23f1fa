use dioxus::prelude::*;

use myshop_common::dashboard::{recent_orders, OrderSummary};
use myshop_common::order::Order;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn DashboardSummary(orders: Vec<Order>) -> Element {
    let summary = OrderSummary::from_orders(&orders);
    let recent = recent_orders(&orders, RECENT_LIMIT);

    rsx! {
        div { class: "dashboard-summary",
            div { class: "summary-cards",
                SummaryCard { label: "Total Orders", value: summary.total.to_string() }
                SummaryCard { label: "Pending", value: summary.pending.to_string() }
                SummaryCard { label: "Completed", value: summary.completed.to_string() }
                SummaryCard { label: "Avg. Delivery", value: summary.average_delivery.to_string() }
            }
            if !recent.is_empty() {
                div { class: "dashboard-section",
                    h4 { "Recent Orders" }
                    ul { class: "recent-orders",
                        for (i, (short_id, date)) in recent.into_iter().enumerate() {
                            li { key: "{i}", "#{short_id} on {date}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "summary-card",
            span { class: "summary-value", "{value}" }
            span { class: "summary-label", "{label}" }
        }
    }
}
