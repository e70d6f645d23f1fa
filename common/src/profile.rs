use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a profile edit was rejected before sending.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name is required")]
    EmptyName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// The profile service refused the update.
    #[error("{0}")]
    Rejected(String),
}

/// Form contents as typed by the customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Payload for the profile update endpoint. A `None` password leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// The signed-in account as returned by the profile service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl ProfileDraft {
    /// Prefill from the current account. Password fields start blank.
    pub fn from_profile(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ProfileError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ProfileError::InvalidEmail),
        }

        if self.password != self.confirm_password {
            return Err(ProfileError::PasswordMismatch);
        }

        Ok(ProfileUpdate {
            name: name.to_string(),
            email: email.to_string(),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        })
    }
}
