//! View model for the account dashboard.
//!
//! Everything the dashboard renders is derived here from an order list and
//! the current [`DashboardState`], so the components only lay out data.

use chrono::{DateTime, Utc};

use crate::config::order_detail_route;
use crate::filter::{filter_orders, partition_by_state};
use crate::format::{add_currency, short_date, short_date_or_dash};
use crate::order::Order;
use crate::progress::{classify_status, compute_progress, TrackingStatus};

/// Hard-coded until delivery times are recorded.
pub const AVERAGE_DELIVERY_PLACEHOLDER: &str = "3.5 days";

/// Dashboard panels reachable from the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    Summary,
    #[default]
    Orders,
    Tracking,
    Reports,
    Profile,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Summary,
            DashboardTab::Orders,
            DashboardTab::Tracking,
            DashboardTab::Reports,
            DashboardTab::Profile,
        ]
    }

    /// Tabs listed above the divider in the sidebar. Profile sits below it.
    pub fn in_main_nav(self) -> bool {
        self != DashboardTab::Profile
    }

    /// Only the order history panel carries a search box.
    pub fn has_search(self) -> bool {
        self == DashboardTab::Orders
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Summary => "Summary",
            DashboardTab::Orders => "Order History",
            DashboardTab::Tracking => "Track Orders",
            DashboardTab::Reports => "Reports",
            DashboardTab::Profile => "My Profile",
        }
    }
}

/// Selection state owned by one dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    SelectTab(DashboardTab),
    SearchChanged(String),
    ClearSearch,
}

impl DashboardState {
    /// Apply one UI event, returning the next state.
    pub fn update(self, event: DashboardEvent) -> Self {
        match event {
            DashboardEvent::SelectTab(active_tab) => Self { active_tab, ..self },
            DashboardEvent::SearchChanged(search) => Self { search, ..self },
            DashboardEvent::ClearSearch => Self {
                search: String::new(),
                ..self
            },
        }
    }
}

/// Headline counts for the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub average_delivery: &'static str,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let partition = partition_by_state(orders);
        Self {
            total: orders.len(),
            pending: partition.pending.len(),
            completed: partition.completed.len(),
            average_delivery: AVERAGE_DELIVERY_PLACEHOLDER,
        }
    }
}

/// One marker on the tracking strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub label: &'static str,
    pub threshold: u8,
    pub reached: bool,
}

const MILESTONES: [(&str, u8); 4] = [
    ("Processing", 25),
    ("Shipped", 50),
    ("In Transit", 75),
    ("Delivered", 100),
];

/// The four-stage strip for a given progress value.
pub fn milestones(progress: u8) -> [Milestone; 4] {
    MILESTONES.map(|(label, threshold)| Milestone {
        label,
        threshold,
        reached: progress >= threshold,
    })
}

/// A row of the order history table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub id: String,
    pub short_id: String,
    pub date: String,
    pub items: usize,
    pub total: String,
    /// Payment date, `None` while unpaid.
    pub paid: Option<String>,
    /// Delivery date, `None` until delivered.
    pub delivered: Option<String>,
    pub detail_route: String,
}

impl OrderRow {
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.0.clone(),
            short_id: order.id.short().to_string(),
            date: short_date_or_dash(order.created_at.as_ref()),
            items: order.item_count(),
            total: add_currency(order.total_price),
            paid: order
                .is_paid
                .then(|| short_date_or_dash(order.paid_at.as_ref())),
            delivered: order
                .is_delivered
                .then(|| short_date_or_dash(order.delivered_at.as_ref())),
            detail_route: order_detail_route(&order.id.0),
        }
    }
}

/// Rows for the history table after applying the search query.
pub fn order_rows(orders: &[Order], query: &str) -> Vec<OrderRow> {
    filter_orders(orders, query)
        .into_iter()
        .map(OrderRow::from_order)
        .collect()
}

/// Everything shown on one tracking card.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingCard {
    pub id: String,
    pub short_id: String,
    pub ordered_on: String,
    pub progress: u8,
    pub status: TrackingStatus,
    pub total: String,
    pub milestones: [Milestone; 4],
    pub shipping_to: Option<String>,
    pub detail_route: String,
}

impl TrackingCard {
    pub fn from_order(order: &Order, now: DateTime<Utc>) -> Self {
        let progress = compute_progress(order, now);
        Self {
            id: order.id.0.clone(),
            short_id: order.id.short().to_string(),
            ordered_on: short_date_or_dash(order.created_at.as_ref()),
            progress,
            status: classify_status(progress),
            total: add_currency(order.total_price),
            milestones: milestones(progress),
            shipping_to: order.shipping_address.as_ref().map(ToString::to_string),
            detail_route: order_detail_route(&order.id.0),
        }
    }
}

/// Cards for every pending order, as of `now`.
pub fn tracking_cards(orders: &[Order], now: DateTime<Utc>) -> Vec<TrackingCard> {
    partition_by_state(orders)
        .pending
        .into_iter()
        .map(|order| TrackingCard::from_order(order, now))
        .collect()
}

/// Badge count for the Track Orders nav item; `None` hides the badge.
pub fn tracking_badge(orders: &[Order]) -> Option<usize> {
    let pending = partition_by_state(orders).pending.len();
    (pending > 0).then_some(pending)
}

/// Most recent order dates first, for the summary's "recent activity" list.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<(String, String)> {
    let mut dated: Vec<_> = orders
        .iter()
        .filter_map(|o| o.created_at.map(|at| (at, o)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated
        .into_iter()
        .take(limit)
        .map(|(at, o)| (o.id.short().to_string(), short_date(&at)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderId, ShippingAddress};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn order(id: &str, is_paid: bool, is_delivered: bool, days_ago: i64) -> Order {
        let created = now() - Duration::days(days_ago);
        Order {
            id: OrderId(id.into()),
            created_at: Some(created),
            paid_at: is_paid.then_some(created),
            delivered_at: is_delivered.then_some(created + Duration::days(4)),
            is_paid,
            is_delivered,
            total_price: 2500.0,
            order_items: Vec::new(),
            shipping_address: None,
        }
    }

    #[test]
    fn test_update_selects_tab_and_keeps_search() {
        let state = DashboardState::default()
            .update(DashboardEvent::SearchChanged("abc".into()))
            .update(DashboardEvent::SelectTab(DashboardTab::Tracking));
        assert_eq!(state.active_tab, DashboardTab::Tracking);
        assert_eq!(state.search, "abc");

        let state = state.update(DashboardEvent::ClearSearch);
        assert!(state.search.is_empty());
        assert_eq!(state.active_tab, DashboardTab::Tracking);
    }

    #[test]
    fn test_default_tab_is_order_history() {
        let state = DashboardState::default();
        assert_eq!(state.active_tab, DashboardTab::Orders);
        assert_eq!(state.active_tab.label(), "Order History");
        assert_eq!(DashboardTab::all().len(), 5);
    }

    #[test]
    fn test_sidebar_tabs_and_search() {
        let main_nav: Vec<_> = DashboardTab::all()
            .iter()
            .copied()
            .filter(|t| t.in_main_nav())
            .collect();
        assert_eq!(
            main_nav,
            [
                DashboardTab::Summary,
                DashboardTab::Orders,
                DashboardTab::Tracking,
                DashboardTab::Reports
            ]
        );
        let searchable: Vec<_> = DashboardTab::all()
            .iter()
            .copied()
            .filter(|t| t.has_search())
            .collect();
        assert_eq!(searchable, [DashboardTab::Orders]);
    }

    #[test]
    fn test_summary_counts_skip_unpaid() {
        let orders = vec![
            order("a", true, false, 1),
            order("b", true, true, 9),
            order("c", false, false, 2),
        ];
        let summary = OrderSummary::from_orders(&orders);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.average_delivery, AVERAGE_DELIVERY_PLACEHOLDER);
    }

    #[test]
    fn test_milestones() {
        let reached = |p| milestones(p).map(|m| m.reached);
        assert_eq!(reached(0), [false, false, false, false]);
        assert_eq!(reached(25), [true, false, false, false]);
        assert_eq!(reached(74), [true, true, false, false]);
        assert_eq!(reached(90), [true, true, true, false]);
        assert_eq!(reached(100), [true, true, true, true]);
        assert_eq!(milestones(0)[2].label, "In Transit");
    }

    #[test]
    fn test_order_rows() {
        let mut orders = vec![order("abc123", true, true, 10), order("zzz999", false, false, 1)];
        orders[0].total_price = 1_234_567.0;
        let rows = order_rows(&orders, "");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total, "Rs. 1,234,567");
        assert_eq!(rows[0].paid.as_deref(), Some("6/5/2026"));
        assert_eq!(rows[0].delivered.as_deref(), Some("6/9/2026"));
        assert_eq!(rows[0].detail_route, "/order/abc123");
        assert_eq!(rows[0].short_id, "abc123");
        assert_eq!(rows[1].paid, None);
        assert_eq!(rows[1].delivered, None);

        let rows = order_rows(&orders, "ABC");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "abc123");
    }

    #[test]
    fn test_order_row_shows_short_id() {
        let o = order("6650a1b2c3d4e5f6abcdef00", true, false, 1);
        let row = OrderRow::from_order(&o);
        assert_eq!(row.short_id, "6650a1b2");
        assert_eq!(row.id, "6650a1b2c3d4e5f6abcdef00");
        assert_eq!(row.detail_route, "/order/6650a1b2c3d4e5f6abcdef00");
    }

    #[test]
    fn test_tracking_cards_only_pending() {
        let mut pending = order("0123456789abcdef", true, false, 0);
        pending.paid_at = Some(now() - Duration::hours(84));
        pending.shipping_address = Some(ShippingAddress {
            address: "12 Galle Rd".into(),
            city: "Colombo".into(),
            postal_code: "00300".into(),
            country: None,
        });
        let orders = vec![pending, order("done", true, true, 8), order("unpaid", false, false, 1)];

        let cards = tracking_cards(&orders, now());
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.short_id, "01234567");
        assert_eq!(card.progress, 50);
        assert_eq!(card.status, TrackingStatus::Shipped);
        assert_eq!(card.milestones.map(|m| m.reached), [true, true, false, false]);
        assert_eq!(card.shipping_to.as_deref(), Some("12 Galle Rd, Colombo, 00300"));
        assert_eq!(card.total, "Rs. 2,500");
    }

    #[test]
    fn test_tracking_badge() {
        assert_eq!(tracking_badge(&[]), None);
        let orders = vec![order("a", true, false, 1), order("b", true, false, 2)];
        assert_eq!(tracking_badge(&orders), Some(2));
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let mut orders = vec![
            order("old-order", true, true, 30),
            order("new-order", true, false, 1),
            order("mid-order", false, false, 10),
        ];
        orders.push(Order {
            created_at: None,
            ..order("no-date", true, false, 0)
        });
        let recent = recent_orders(&orders, 2);
        assert_eq!(
            recent,
            vec![
                ("new-orde".to_string(), "6/14/2026".to_string()),
                ("mid-orde".to_string(), "6/5/2026".to_string()),
            ]
        );
    }
}
