use chrono::Utc;
use dioxus::prelude::*;

use myshop_common::dashboard::{tracking_cards, Milestone, TrackingCard};
use myshop_common::order::Order;

use super::feedback::Message;

/// One card per paid, undelivered order.
#[component]
pub fn OrderTracking(orders: Vec<Order>) -> Element {
    let cards = tracking_cards(&orders, Utc::now());

    if cards.is_empty() {
        return rsx! {
            Message { variant: "info",
                div { class: "tracking-empty",
                    span { class: "tracking-empty-icon", "🚚" }
                    h5 { "No Active Orders to Track" }
                    p { "All your orders have been delivered or are waiting for payment." }
                    a { class: "button", href: "/", "Continue Shopping" }
                }
            }
        };
    }

    rsx! {
        div { class: "order-tracking",
            for card in cards {
                TrackingCardView { key: "{card.id}", card: card.clone() }
            }
        }
    }
}

#[component]
fn TrackingCardView(card: TrackingCard) -> Element {
    let progress = card.progress;

    rsx! {
        div { class: "tracking-card",
            div { class: "tracking-card-header",
                div {
                    h5 { "Order #{card.short_id}" }
                    small { class: "text-muted", "Ordered on {card.ordered_on}" }
                }
                a { class: "button button-outline button-small", href: "{card.detail_route}", "View Details" }
            }
            div { class: "tracking-card-body",
                div { class: "tracking-status-line",
                    span { "Status: " strong { "{card.status}" } }
                    span { "Total: " strong { "{card.total}" } }
                }
                div { class: "progress",
                    div {
                        class: "progress-bar",
                        role: "progressbar",
                        style: "width: {progress}%",
                        "aria-valuenow": "{progress}",
                        "aria-valuemin": "0",
                        "aria-valuemax": "100",
                        "{progress}%"
                    }
                }
                div { class: "tracking-steps",
                    for milestone in card.milestones {
                        MilestoneMarker { milestone }
                    }
                }
                if let Some(address) = &card.shipping_to {
                    div { class: "tracking-address",
                        small { class: "text-muted", "Shipping to:" }
                        div { "{address}" }
                    }
                }
            }
        }
    }
}

#[component]
fn MilestoneMarker(milestone: Milestone) -> Element {
    let icon = match milestone.threshold {
        75 => "🚚",
        100 => "✔",
        _ => "📦",
    };
    let state = if milestone.reached { "reached" } else { "pending" };

    rsx! {
        div { class: "tracking-step tracking-step-{state}",
            span { class: "tracking-step-icon", "{icon}" }
            div { class: "tracking-step-label", "{milestone.label}" }
        }
    }
}
