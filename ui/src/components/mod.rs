pub mod account_dashboard;
pub mod app;
pub mod dashboard_summary;
pub mod feedback;
pub mod order_history;
pub mod order_tracking;
pub mod orders_api;
pub mod profile_form;
pub mod reports_view;
pub mod shared_state;
pub mod user_state;
