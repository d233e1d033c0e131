//! Rendering shared by the signup and login views.

use dioxus::prelude::*;

use crate::forms::RoleForm;
use crate::session::Role;

/// Row of role buttons. Clicking one switches the form's role.
pub fn role_selector<F: RoleForm>(
    mut form: Signal<F>,
    class: &'static str,
    label: fn(Role) -> &'static str,
) -> Element {
    let current = form.read().role();

    rsx! {
        div {
            class: "{class}",
            for role in Role::ALL {
                button {
                    key: "{role.slug()}",
                    r#type: "button",
                    class: if role == current { "active" } else { "" },
                    onclick: move |_| {
                        tracing::debug!(%role, "Role selected");
                        form.write().switch_role(role);
                    },
                    "{label(role)}"
                }
            }
        }
    }
}

/// One labelled input per field visible for the form's current role.
pub fn role_fields<F: RoleForm>(mut form: Signal<F>) -> Element {
    let inputs: Vec<_> = {
        let current = form.read();
        current
            .fields()
            .iter()
            .map(|&field| {
                let spec = field.spec();
                let marker = if spec.required { " *" } else { "" };
                (field, spec, marker, current.value(field).to_string())
            })
            .collect()
    };

    rsx! {
        for (field, spec, marker, value) in inputs {
            div {
                key: "{spec.html_id}",
                class: "form-group",
                label { r#for: "{spec.html_id}", "{spec.label}{marker}" }
                input {
                    r#type: "{spec.input_type}",
                    id: "{spec.html_id}",
                    name: "{spec.html_id}",
                    placeholder: "{spec.placeholder}",
                    required: spec.required,
                    value: "{value}",
                    oninput: move |evt: FormEvent| {
                        form.write().set(field, evt.value());
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldId, LoginForm, SignupForm};
    use crate::panels::test_support::render;

    fn student_signup_fields() -> Element {
        let form = use_signal(|| SignupForm::empty(Role::Student));
        role_fields(form)
    }

    fn prefilled_login_fields() -> Element {
        let form = use_signal(|| {
            let mut form = LoginForm::empty(Role::Individual);
            form.set(FieldId::Email, "wanjiru@example.com");
            form
        });
        role_fields(form)
    }

    #[test]
    fn test_one_group_per_visible_field() {
        let html = render(student_signup_fields);
        assert_eq!(html.matches(r#"class="form-group""#).count(), 5);
        for id in ["admissionNumber", "orgName", "phonenumber", "password", "confirmPassword"] {
            assert!(html.contains(&format!(r#"for="{id}""#)), "missing label for {id}");
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing input {id}");
        }
    }

    #[test]
    fn test_inputs_show_current_values() {
        let html = render(prefilled_login_fields);
        assert_eq!(html.matches(r#"class="form-group""#).count(), 2);
        assert!(html.contains("wanjiru@example.com"));
        assert!(html.contains("Email *"));
    }
}
