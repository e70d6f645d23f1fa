use dioxus::prelude::*;

use myshop_common::profile::UserProfile;

/// Browser storage key the storefront keeps the signed-in account under.
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
const USER_INFO_KEY: &str = "userInfo";

/// Outcome of the last profile save, shown under the form.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileNotice {
    Saved,
    Failed(String),
}

/// The signed-in account, as far as this dashboard needs it.
#[derive(Clone, Debug, Default)]
pub struct UserState {
    pub name: String,
    pub email: String,
    pub saving: bool,
    pub profile_notice: Option<ProfileNotice>,
}

impl UserState {
    /// Restore the account the storefront stored at sign-in.
    pub fn load() -> Self {
        #[cfg(target_family = "wasm")]
        {
            let stored = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(USER_INFO_KEY).ok().flatten())
                .and_then(|json| serde_json::from_str::<UserProfile>(&json).ok());
            match stored {
                Some(profile) => Self::from_profile(profile),
                None => {
                    tracing::warn!("No stored account found under {USER_INFO_KEY}");
                    Self::default()
                }
            }
        }
        #[cfg(not(target_family = "wasm"))]
        {
            Self::default()
        }
    }

    #[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
    fn from_profile(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            ..Self::default()
        }
    }

    /// Apply a confirmed update from the profile service.
    pub fn apply_profile(&mut self, profile: &UserProfile) {
        self.name = profile.name.clone();
        self.email = profile.email.clone();
        self.saving = false;
        self.profile_notice = Some(ProfileNotice::Saved);
        self.save(profile);
    }

    pub fn reject_profile(&mut self, message: String) {
        self.saving = false;
        self.profile_notice = Some(ProfileNotice::Failed(message));
    }

    /// Write the new name and email back into the stored account, keeping
    /// whatever else the storefront put there.
    fn save(&self, profile: &UserProfile) {
        #[cfg(target_family = "wasm")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            let mut stored = storage
                .get_item(USER_INFO_KEY)
                .ok()
                .flatten()
                .and_then(|json| serde_json::from_str::<serde_json::Value>(&json).ok())
                .filter(serde_json::Value::is_object)
                .unwrap_or_else(|| serde_json::json!({}));
            stored["name"] = profile.name.clone().into();
            stored["email"] = profile.email.clone().into();
            if storage.set_item(USER_INFO_KEY, &stored.to_string()).is_err() {
                tracing::warn!("Failed to persist updated account");
            }
        }
        #[cfg(not(target_family = "wasm"))]
        {
            let _ = profile;
        }
    }
}

pub fn use_user_state() -> Signal<UserState> {
    use_context::<Signal<UserState>>()
}
