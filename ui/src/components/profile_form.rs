use dioxus::prelude::*;

use myshop_common::profile::ProfileDraft;

use super::feedback::Message;
use super::orders_api::{use_orders_action, OrdersAction};
use super::user_state::{use_user_state, ProfileNotice};

#[component]
pub fn ProfileForm() -> Element {
    let mut user_state = use_user_state();
    let api = use_orders_action();

    let (initial_name, initial_email) = {
        let state = user_state.read();
        (state.name.clone(), state.email.clone())
    };
    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let state = user_state.read();
    let saving = state.saving;
    let notice = state.profile_notice.clone();
    drop(state);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ProfileDraft {
            name: name.read().clone(),
            email: email.read().clone(),
            password: password.read().clone(),
            confirm_password: confirm_password.read().clone(),
        };
        match draft.validate() {
            Ok(update) => {
                form_error.set(None);
                password.set(String::new());
                confirm_password.set(String::new());
                {
                    let mut state = user_state.write();
                    state.profile_notice = None;
                    state.saving = true;
                }
                api.send(OrdersAction::UpdateProfile(update));
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    rsx! {
        form { class: "profile-form", onsubmit: submit,
            div { class: "form-group",
                label { "Name" }
                input {
                    r#type: "text",
                    placeholder: "Enter name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Email Address" }
                input {
                    r#type: "email",
                    placeholder: "Enter email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Password" }
                input {
                    r#type: "password",
                    placeholder: "Leave blank to keep current password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            div { class: "form-group",
                label { "Confirm Password" }
                input {
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: "{confirm_password}",
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
            }
            if let Some(err) = form_error.read().as_ref() {
                span { class: "field-error", "{err}" }
            }
            if notice == Some(ProfileNotice::Saved) {
                Message { variant: "success", "Profile updated" }
            }
            if let Some(ProfileNotice::Failed(message)) = &notice {
                Message { variant: "danger", "{message}" }
            }
            button { r#type: "submit", disabled: saving,
                if saving { "Updating..." } else { "Update" }
            }
        }
    }
}
