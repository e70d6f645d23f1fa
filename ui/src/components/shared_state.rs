use dioxus::prelude::*;

use myshop_common::query::OrdersQuery;

/// API-sourced state shared across all components.
///
/// Written by the orders coroutine when a fetch completes; the dashboard
/// views only read it.
#[derive(Clone, Debug, Default)]
pub struct SharedState {
    /// The signed-in customer's orders.
    pub orders: OrdersQuery,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn use_shared_state() -> Signal<SharedState> {
    use_context::<Signal<SharedState>>()
}
