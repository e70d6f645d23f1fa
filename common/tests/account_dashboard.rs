use chrono::{DateTime, TimeZone, Utc};

use myshop_common::dashboard::{
    order_rows, tracking_badge, tracking_cards, DashboardEvent, DashboardState, DashboardTab,
    OrderSummary,
};
use myshop_common::progress::TrackingStatus;
use myshop_common::query::{parse_orders, OrderFetchError, OrdersQuery};

const MY_ORDERS: &str = r#"[
    {
        "_id": "6650a1b2c3d4e5f601234567",
        "createdAt": "2026-06-11T10:00:00.000Z",
        "paidAt": "2026-06-12T00:00:00.000Z",
        "isPaid": true,
        "isDelivered": false,
        "totalPrice": 18450,
        "orderItems": [{ "name": "Ceylon Tea 500g", "qty": 3, "price": 6150 }],
        "shippingAddress": { "address": "45 Temple Rd", "city": "Kandy", "postalCode": "20000", "country": "Sri Lanka" }
    },
    {
        "_id": "6650a1b2c3d4e5f6abcdef00",
        "createdAt": "2026-05-02T08:15:00.000Z",
        "paidAt": "2026-05-02T08:20:00.000Z",
        "deliveredAt": "2026-05-06T14:00:00.000Z",
        "isPaid": true,
        "isDelivered": true,
        "totalPrice": 1234567,
        "orderItems": [
            { "name": "Laptop", "qty": 1, "price": 1200000 },
            { "name": "Sleeve", "qty": 1, "price": 34567 }
        ]
    },
    {
        "_id": "6650a1b2c3d4e5f6ffff0000",
        "createdAt": "2026-06-14T19:45:00.000Z",
        "isPaid": false,
        "isDelivered": false,
        "totalPrice": 990,
        "orderItems": [{ "name": "Notebook", "qty": 1, "price": 990 }]
    }
]"#;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn loaded_orders_drive_every_panel() {
    let query: OrdersQuery = parse_orders(MY_ORDERS).into();
    let orders = query.orders();
    assert_eq!(orders.len(), 3);

    let summary = OrderSummary::from_orders(orders);
    assert_eq!((summary.total, summary.pending, summary.completed), (3, 1, 1));
    assert_eq!(tracking_badge(orders), Some(1));

    // Paid 3.5 days before `now`.
    let cards = tracking_cards(orders, now());
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].short_id, "6650a1b2");
    assert_eq!(cards[0].ordered_on, "6/11/2026");
    assert_eq!(cards[0].progress, 50);
    assert_eq!(cards[0].status, TrackingStatus::Shipped);
    assert_eq!(cards[0].total, "Rs. 18,450");
    assert_eq!(cards[0].shipping_to.as_deref(), Some("45 Temple Rd, Kandy, 20000"));

    let rows = order_rows(orders, "");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].total, "Rs. 1,234,567");
    assert_eq!(rows[1].items, 2);
    assert_eq!(rows[1].delivered.as_deref(), Some("5/6/2026"));
    assert_eq!(rows[2].paid, None);
}

#[test]
fn search_events_narrow_the_table() {
    let query: OrdersQuery = parse_orders(MY_ORDERS).into();
    let orders = query.orders();

    let state = DashboardState::default()
        .update(DashboardEvent::SelectTab(DashboardTab::Orders))
        .update(DashboardEvent::SearchChanged("ABCDEF".into()));
    let rows = order_rows(orders, &state.search);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "6650a1b2c3d4e5f6abcdef00");

    let state = state.update(DashboardEvent::SearchChanged("6/1".into()));
    let ids: Vec<_> = order_rows(orders, &state.search)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, ["6650a1b2c3d4e5f601234567", "6650a1b2c3d4e5f6ffff0000"]);

    let state = state.update(DashboardEvent::ClearSearch);
    assert_eq!(order_rows(orders, &state.search).len(), 3);
}

#[test]
fn failed_query_shows_message_and_no_orders() {
    let query = OrdersQuery::Failed(OrderFetchError::from_response(
        401,
        r#"{"message":"Not authorized, token failed"}"#,
    ));
    assert!(query.orders().is_empty());
    assert_eq!(
        query.error().map(OrderFetchError::user_message).as_deref(),
        Some("Not authorized, token failed")
    );
    assert!(tracking_cards(query.orders(), now()).is_empty());
}
