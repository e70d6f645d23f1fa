use dioxus::prelude::*;

use super::account_dashboard::AccountDashboard;
use super::orders_api::use_orders_coroutine;
use super::shared_state::SharedState;
use super::user_state::{use_user_state, UserState};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/profile")]
    Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(UserState::load()));
    use_context_provider(|| Signal::new(SharedState::new()));
    use_orders_coroutine();

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let user_state = use_user_state();
    let name = user_state.read().name.clone();

    rsx! {
        div { class: "myshop-app",
            header { class: "app-header",
                h1 { "MyShop" }
                if !name.is_empty() {
                    span { class: "user-name", "Signed in as {name}" }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: the account dashboard.
#[component]
fn Profile() -> Element {
    rsx! { AccountDashboard {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{path}");
    rsx! {
        div { class: "myshop-app",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Profile {}, "Back to your account" }
        }
    }
}
