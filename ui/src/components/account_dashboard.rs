use dioxus::prelude::*;

use myshop_common::dashboard::{tracking_badge, DashboardEvent, DashboardState, DashboardTab};
use myshop_common::query::OrdersQuery;

use super::dashboard_summary::DashboardSummary;
use super::feedback::{Loader, Message};
use super::order_history::{OrderHistory, OrderSearch};
use super::order_tracking::OrderTracking;
use super::orders_api::{use_orders_action, OrdersAction};
use super::profile_form::ProfileForm;
use super::reports_view::ReportsView;
use super::shared_state::use_shared_state;

/// Run one event through the pure state update.
fn dispatch(mut state: Signal<DashboardState>, event: DashboardEvent) {
    let next = state.peek().clone().update(event);
    state.set(next);
}

/// The customer's account page: sidebar navigation plus the active panel.
#[component]
pub fn AccountDashboard() -> Element {
    let shared_state = use_shared_state();
    let dashboard = use_signal(DashboardState::default);

    let query = shared_state.read().orders.clone();
    let badge = tracking_badge(query.orders()).unwrap_or(0);
    let DashboardState { active_tab, search } = dashboard.read().clone();

    let panel = match active_tab {
        DashboardTab::Profile => rsx! {
            h3 { class: "panel-title", "My Profile" }
            ProfileForm {}
        },
        DashboardTab::Reports => rsx! { ReportsView {} },
        tab => rsx! {
            OrdersPanel { tab, query, search, dashboard }
        },
    };

    rsx! {
        div { class: "account-dashboard",
            aside { class: "dashboard-sidebar",
                div { class: "sidebar-header", h5 { "Dashboard" } }
                nav { class: "sidebar-nav",
                    a { class: "nav-link", href: "/", "🏠 Home" }
                    for tab in DashboardTab::all().iter().copied().filter(|t| t.in_main_nav()) {
                        TabLink { key: "{tab.label()}", tab, active: active_tab == tab, dashboard,
                            badge: if tab == DashboardTab::Tracking { badge } else { 0 },
                        }
                    }
                    a { class: "nav-link", href: "/wishlist", "♥ Wishlist" }
                    hr {}
                    a { class: "nav-link", href: "/help", "? Help & Support" }
                    TabLink { tab: DashboardTab::Profile, active: active_tab == DashboardTab::Profile, dashboard }
                }
                div { class: "sidebar-footer", small { "© 2025 MyShop" } }
            }
            section { class: "dashboard-panel",
                {panel}
            }
        }
    }
}

#[component]
fn TabLink(
    tab: DashboardTab,
    active: bool,
    dashboard: Signal<DashboardState>,
    #[props(default)] badge: usize,
) -> Element {
    let class = if active { "nav-link active" } else { "nav-link" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| dispatch(dashboard, DashboardEvent::SelectTab(tab)),
            "{tab.label()}"
            if badge > 0 {
                span { class: "badge badge-pill", "{badge}" }
            }
        }
    }
}

/// Panels that depend on the order query: loading and error states first.
#[component]
fn OrdersPanel(
    tab: DashboardTab,
    query: OrdersQuery,
    search: String,
    dashboard: Signal<DashboardState>,
) -> Element {
    let api = use_orders_action();

    let body = match query {
        OrdersQuery::Loading => rsx! { Loader {} },
        OrdersQuery::Failed(err) => {
            let message = err.user_message();
            rsx! {
                Message { variant: "danger", "{message}" }
                button { onclick: move |_| api.send(OrdersAction::Refresh), "Try again" }
            }
        }
        OrdersQuery::Loaded(orders) => match tab {
            DashboardTab::Summary => rsx! { DashboardSummary { orders } },
            DashboardTab::Tracking => rsx! { OrderTracking { orders } },
            _ => rsx! { OrderHistory { orders, search: search.clone() } },
        },
    };

    rsx! {
        h3 { class: "panel-title", "{tab.label()}" }
        if tab.has_search() {
            OrderSearch {
                search: search.clone(),
                on_search: move |value: String| dispatch(dashboard, DashboardEvent::SearchChanged(value)),
                on_clear: move |_| dispatch(dashboard, DashboardEvent::ClearSearch),
            }
        }
        {body}
    }
}
