use dioxus::prelude::*;
use futures::StreamExt;

use myshop_common::config::ApiConfig;
use myshop_common::order::Order;
use myshop_common::profile::{ProfileError, ProfileUpdate, UserProfile};
use myshop_common::query::{OrderFetchError, OrdersQuery};

use super::shared_state::{use_shared_state, SharedState};
use super::user_state::{use_user_state, UserState};

/// Requests the UI can send to the storefront API coroutine.
#[derive(Debug, Clone)]
pub enum OrdersAction {
    /// Fetch "my orders" again.
    Refresh,
    /// Save profile changes for the signed-in account.
    UpdateProfile(ProfileUpdate),
}

/// Get a handle to send actions to the API coroutine.
pub fn use_orders_action() -> Coroutine<OrdersAction> {
    use_coroutine_handle::<OrdersAction>()
}

/// Start the API coroutine. It loads the order list once on start, then
/// serves [`OrdersAction`]s until the app is torn down.
pub fn use_orders_coroutine() {
    let shared = use_shared_state();
    let user = use_user_state();
    use_coroutine(move |rx: UnboundedReceiver<OrdersAction>| api_comms(rx, shared, user));
}

/// Base URL from the build, overridable with `?api=<url>`.
fn api_config() -> ApiConfig {
    #[cfg(target_family = "wasm")]
    {
        ApiConfig::from_build_env().with_override(wasm_impl::api_override().as_deref())
    }
    #[cfg(not(target_family = "wasm"))]
    {
        ApiConfig::from_build_env()
    }
}

async fn api_comms(
    mut rx: UnboundedReceiver<OrdersAction>,
    mut shared: Signal<SharedState>,
    mut user: Signal<UserState>,
) {
    let config = api_config();
    tracing::debug!("Storefront API at {}", config.base_url());

    load_orders(&config, &mut shared).await;

    while let Some(action) = rx.next().await {
        match action {
            OrdersAction::Refresh => load_orders(&config, &mut shared).await,
            OrdersAction::UpdateProfile(update) => {
                user.write().saving = true;
                match update_profile(&config, &update).await {
                    Ok(profile) => {
                        tracing::info!("Profile updated for {}", profile.email);
                        user.write().apply_profile(&profile);
                    }
                    Err(err) => {
                        tracing::warn!("Profile update failed: {err}");
                        user.write().reject_profile(err.to_string());
                    }
                }
            }
        }
    }
}

async fn load_orders(config: &ApiConfig, shared: &mut Signal<SharedState>) {
    shared.write().orders = OrdersQuery::Loading;
    tracing::debug!("Fetching orders from {}", config.orders_url());

    let result = fetch_my_orders(config).await;
    match &result {
        Ok(orders) => tracing::debug!("Loaded {} orders", orders.len()),
        Err(err) => tracing::warn!("Order fetch failed: {err}"),
    }
    shared.write().orders = result.into();
}

async fn fetch_my_orders(config: &ApiConfig) -> Result<Vec<Order>, OrderFetchError> {
    #[cfg(target_family = "wasm")]
    {
        let (status, body) = wasm_impl::send("GET", &config.orders_url(), None)
            .await
            .map_err(OrderFetchError::Transport)?;
        if !(200..300).contains(&status) {
            return Err(OrderFetchError::from_response(status, &body));
        }
        myshop_common::query::parse_orders(&body)
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = config;
        if cfg!(feature = "example-data") {
            Ok(example_orders(chrono::Utc::now()))
        } else {
            Ok(Vec::new())
        }
    }
}

async fn update_profile(
    config: &ApiConfig,
    update: &ProfileUpdate,
) -> Result<UserProfile, ProfileError> {
    #[cfg(target_family = "wasm")]
    {
        use myshop_common::query::error_body_message;

        let payload =
            serde_json::to_string(update).map_err(|e| ProfileError::Rejected(e.to_string()))?;
        let (status, body) = wasm_impl::send("PUT", &config.profile_url(), Some(payload))
            .await
            .map_err(ProfileError::Rejected)?;
        if !(200..300).contains(&status) {
            return Err(ProfileError::Rejected(
                error_body_message(&body).unwrap_or_else(|| format!("Profile update failed ({status})")),
            ));
        }
        serde_json::from_str(&body).map_err(|e| ProfileError::Rejected(e.to_string()))
    }
    #[cfg(not(target_family = "wasm"))]
    {
        // Offline: accept the update as-is.
        let _ = config;
        Ok(UserProfile {
            id: String::new(),
            name: update.name.clone(),
            email: update.email.clone(),
        })
    }
}

/// Demo order list for offline builds with `example-data`.
#[cfg(not(target_family = "wasm"))]
fn example_orders(now: chrono::DateTime<chrono::Utc>) -> Vec<Order> {
    use chrono::Duration;
    use myshop_common::order::{OrderId, OrderItem, ShippingAddress};

    let item = |name: &str, qty: u32, price: f64| OrderItem {
        name: name.into(),
        qty,
        price,
        image: None,
        product: None,
    };
    let address = ShippingAddress {
        address: "45 Temple Rd".into(),
        city: "Kandy".into(),
        postal_code: "20000".into(),
        country: Some("Sri Lanka".into()),
    };
    let order = |id: &str, days_ago: i64, paid: bool, delivered: bool, items: Vec<OrderItem>| {
        let created = now - Duration::days(days_ago);
        Order {
            id: OrderId(id.into()),
            created_at: Some(created),
            paid_at: paid.then_some(created + Duration::hours(1)),
            delivered_at: delivered.then_some(created + Duration::days(4)),
            is_paid: paid,
            is_delivered: delivered,
            total_price: items.iter().map(|i| i.price * i.qty as f64).sum(),
            order_items: items,
            shipping_address: Some(address.clone()),
        }
    };

    vec![
        order("6650a1b2c3d4e5f601234567", 1, true, false, vec![item("Ceylon Tea 500g", 3, 6150.0)]),
        order("6650a1b2c3d4e5f601234568", 4, true, false, vec![item("Clay Pot", 1, 3499.0)]),
        order(
            "6650a1b2c3d4e5f6abcdef00",
            45,
            true,
            true,
            vec![item("Laptop", 1, 1_200_000.0), item("Sleeve", 1, 34_567.0)],
        ),
        order("6650a1b2c3d4e5f6ffff0000", 0, false, false, vec![item("Notebook", 2, 495.0)]),
    ]
}

// ─── WASM implementation ────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
mod wasm_impl {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

    /// `?api=<url>` from the page URL, if present.
    pub fn api_override() -> Option<String> {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|qs| web_sys::UrlSearchParams::new_with_str(&qs).ok()?.get("api"))
    }

    /// Send a request with the session cookie and return status plus body text.
    pub async fn send(method: &str, url: &str, body: Option<String>) -> Result<(u16, String), String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

        let init = RequestInit::new();
        init.set_method(method);
        init.set_mode(RequestMode::Cors);
        init.set_credentials(RequestCredentials::Include);
        let has_body = body.is_some();
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        request.headers().set("Accept", "application/json").map_err(js_error)?;
        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok((response.status(), text.as_string().unwrap_or_default()))
    }

    fn js_error(value: JsValue) -> String {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return String::from(err.message());
        }
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}
