//! Login page.

use dioxus::prelude::*;

use crate::auth_form::{role_fields, role_selector};
use crate::forms::{LoginForm, RoleForm};
use crate::navigation::{destination_after_login, Destination};
use crate::session::Role;

/// Sign-in form. Submitting logs the captured values and calls
/// [`api::sign_in`]; there is no follow-up navigation.
#[component]
pub fn LoginView(
    on_navigate: EventHandler<Destination>,
    #[props(default)] initial_role: Role,
) -> Element {
    let form = use_signal(|| LoginForm::empty(initial_role));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = form.read().submission();
        let role = submission.role;
        tracing::info!(record = %submission, "Login submitted");

        spawn(async move {
            if let Err(e) = api::sign_in(submission.into_credentials()).await {
                tracing::error!("Error signing in: {}", e);
            }
            if let Some(destination) = destination_after_login(role) {
                on_navigate.call(destination);
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            h2 { "Login" }

            {role_selector(form, "login-type-selector", Role::label)}

            form {
                class: "login-form",
                onsubmit: handle_submit,
                {role_fields(form)}
                button {
                    r#type: "submit",
                    class: "primary-button login-button",
                    "{form.read().submit_label()}"
                }
            }

            div {
                class: "signup",
                p {
                    "Don't have an account? "
                    a {
                        class: "auth-switch",
                        onclick: move |_| on_navigate.call(Destination::Signup),
                        "SignUp"
                    }
                }
            }
        }
    }
}
