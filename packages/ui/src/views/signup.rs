//! Signup page.

use dioxus::prelude::*;

use crate::auth_form::{role_fields, role_selector};
use crate::forms::{RoleForm, SignupForm};
use crate::navigation::{destination_after_signup, Destination};
use crate::session::Role;

/// Account creation form.
///
/// Submitting logs the captured values, hands them to [`api::register`] and
/// then navigates by role: organizations land on the admin dashboard, everyone
/// else on the individual dashboard. A failed call is logged and navigation
/// still happens.
#[component]
pub fn SignupView(
    on_navigate: EventHandler<Destination>,
    #[props(default)] initial_role: Role,
) -> Element {
    let form = use_signal(|| SignupForm::empty(initial_role));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submission = form.read().submission();
        let role = submission.role;
        tracing::info!(record = %submission, "Signup submitted");

        spawn(async move {
            if let Err(e) = api::register(submission.into_credentials()).await {
                tracing::error!("Error registering account: {}", e);
            }
            on_navigate.call(destination_after_signup(role));
        });
    };

    rsx! {
        div {
            class: "signup-page",
            h2 { "Create Your Account" }

            {role_selector(form, "account-type-selector", Role::signup_label)}

            form {
                class: "signup-form",
                onsubmit: handle_submit,
                {role_fields(form)}
                button {
                    r#type: "submit",
                    class: "primary-button signup-button",
                    "{form.read().submit_label()}"
                }
            }

            div {
                class: "signup",
                p {
                    "Already have an account? "
                    a {
                        class: "auth-switch",
                        onclick: move |_| on_navigate.call(Destination::Login),
                        "Login"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_support::render;

    fn individual() -> Element {
        rsx! { SignupView { on_navigate: |_| {} } }
    }

    fn organization() -> Element {
        rsx! { SignupView { on_navigate: |_| {}, initial_role: Role::Organization } }
    }

    fn student() -> Element {
        rsx! { SignupView { on_navigate: |_| {}, initial_role: Role::Student } }
    }

    fn input_ids(html: &str) -> Vec<&str> {
        html.split("id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_individual_fields_only() {
        let html = render(individual);
        assert_eq!(input_ids(&html), vec!["email", "password", "confirmPassword"]);
        assert!(html.contains("Create Individual Account"));
    }

    #[test]
    fn test_organization_adds_organization_name() {
        let html = render(organization);
        assert_eq!(
            input_ids(&html),
            vec!["organizationName", "email", "password", "confirmPassword"]
        );
        assert!(html.contains("Register School"));
        assert!(html.contains("Go to Dashboard"));
    }

    #[test]
    fn test_student_fields_only() {
        let html = render(student);
        assert_eq!(
            input_ids(&html),
            vec!["admissionNumber", "orgName", "phonenumber", "password", "confirmPassword"]
        );
    }

    #[test]
    fn test_selector_marks_active_role() {
        let html = render(organization);
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        assert!(html.contains("Organization (Teacher/School)"));
    }
}
