/// Storefront API location used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "/api";

/// Where the dashboard talks to the storefront API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if trimmed.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    /// Base URL baked in at compile time via `MYSHOP_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MYSHOP_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Replace the base URL with a runtime override, e.g. from `?api=`.
    pub fn with_override(self, base_url: Option<&str>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => self,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// "Get my orders" endpoint.
    pub fn orders_url(&self) -> String {
        format!("{}/orders/mine", self.base_url)
    }

    /// Profile update endpoint.
    pub fn profile_url(&self) -> String {
        format!("{}/users/profile", self.base_url)
    }
}

/// In-app route for a single order's detail page.
pub fn order_detail_route(id: &str) -> String {
    format!("/order/{id}")
}
