//! # Role-driven signup and login forms
//!
//! Each form is a tagged union with one payload per [`Role`]. The set of
//! visible inputs is read off the active variant, so a field that does not
//! belong to the selected role has nowhere to live. Switching role builds a
//! fresh payload; values typed for one role never leak into another.
//!
//! | Form | Individual | Organization | Student |
//! |------|-----------|--------------|---------|
//! | [`SignupForm`] | email, password, confirm | organization name, email, password, confirm | admission no., school, phone, password, confirm |
//! | [`LoginForm`] | email, phone | email, phone | admission no., phone, school |
//!
//! Submitting produces a [`Submission`]: a diagnostic record whose `Display`
//! masks secrets, plus the raw [`api::Credentials`] for the backend call.

use std::fmt;

use crate::session::Role;

/// Every input any auth form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    OrganizationName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    AdmissionNumber,
    SchoolName,
}

/// Static rendering facts for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub html_id: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

impl FieldId {
    pub fn spec(self) -> FieldSpec {
        let (html_id, label, input_type, placeholder) = match self {
            FieldId::OrganizationName => (
                "organizationName",
                "Organization/School Name",
                "text",
                "E.g., Green Hills Elementary",
            ),
            FieldId::Email => ("email", "Email", "email", "you@example.com"),
            FieldId::Phone => ("phonenumber", "Phone Number", "tel", "e.g. +254712345678"),
            FieldId::Password => ("password", "Password", "password", ""),
            FieldId::ConfirmPassword => ("confirmPassword", "Confirm Password", "password", ""),
            FieldId::AdmissionNumber => ("admissionNumber", "Admission Number", "text", "e.g. 2025-001"),
            FieldId::SchoolName => (
                "orgName",
                "School / Organization Name",
                "text",
                "e.g. Green Hills Elementary",
            ),
        };
        FieldSpec {
            html_id,
            label,
            input_type,
            placeholder,
            required: true,
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }
}

/// Behaviour shared by the role-polymorphic forms.
pub trait RoleForm: Clone + PartialEq + 'static {
    /// Empty payload for `role`.
    fn empty(role: Role) -> Self;

    fn role(&self) -> Role;

    /// Visible inputs, in display order.
    fn fields(&self) -> &'static [FieldId];

    fn slot(&self, field: FieldId) -> Option<&String>;

    fn slot_mut(&mut self, field: FieldId) -> Option<&mut String>;

    fn submit_label(&self) -> &'static str;

    /// Current value, or `""` if the field is not part of this role.
    fn value(&self, field: FieldId) -> &str {
        self.slot(field).map(String::as_str).unwrap_or("")
    }

    /// Returns `false` and changes nothing when `field` is hidden for this role.
    fn set(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    fn switch_role(&mut self, role: Role) {
        if self.role() != role {
            *self = Self::empty(role);
        }
    }

    fn submission(&self) -> Submission {
        Submission {
            role: self.role(),
            entries: self
                .fields()
                .iter()
                .map(|&field| (field, self.value(field).to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignupForm {
    Individual {
        email: String,
        password: String,
        confirm_password: String,
    },
    Organization {
        organization_name: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    Student {
        admission_number: String,
        school_name: String,
        phone: String,
        password: String,
        confirm_password: String,
    },
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::empty(Role::default())
    }
}

impl RoleForm for SignupForm {
    fn empty(role: Role) -> Self {
        match role {
            Role::Individual => SignupForm::Individual {
                email: String::new(),
                password: String::new(),
                confirm_password: String::new(),
            },
            Role::Organization => SignupForm::Organization {
                organization_name: String::new(),
                email: String::new(),
                password: String::new(),
                confirm_password: String::new(),
            },
            Role::Student => SignupForm::Student {
                admission_number: String::new(),
                school_name: String::new(),
                phone: String::new(),
                password: String::new(),
                confirm_password: String::new(),
            },
        }
    }

    fn role(&self) -> Role {
        match self {
            SignupForm::Individual { .. } => Role::Individual,
            SignupForm::Organization { .. } => Role::Organization,
            SignupForm::Student { .. } => Role::Student,
        }
    }

    fn fields(&self) -> &'static [FieldId] {
        use FieldId::*;
        match self {
            SignupForm::Individual { .. } => &[Email, Password, ConfirmPassword],
            SignupForm::Organization { .. } => {
                &[OrganizationName, Email, Password, ConfirmPassword]
            }
            SignupForm::Student { .. } => {
                &[AdmissionNumber, SchoolName, Phone, Password, ConfirmPassword]
            }
        }
    }

    fn slot(&self, field: FieldId) -> Option<&String> {
        use FieldId::*;
        match (self, field) {
            (SignupForm::Individual { email, .. }, Email) => Some(email),
            (SignupForm::Individual { password, .. }, Password) => Some(password),
            (SignupForm::Individual { confirm_password, .. }, ConfirmPassword) => {
                Some(confirm_password)
            }
            (SignupForm::Organization { organization_name, .. }, OrganizationName) => {
                Some(organization_name)
            }
            (SignupForm::Organization { email, .. }, Email) => Some(email),
            (SignupForm::Organization { password, .. }, Password) => Some(password),
            (SignupForm::Organization { confirm_password, .. }, ConfirmPassword) => {
                Some(confirm_password)
            }
            (SignupForm::Student { admission_number, .. }, AdmissionNumber) => {
                Some(admission_number)
            }
            (SignupForm::Student { school_name, .. }, SchoolName) => Some(school_name),
            (SignupForm::Student { phone, .. }, Phone) => Some(phone),
            (SignupForm::Student { password, .. }, Password) => Some(password),
            (SignupForm::Student { confirm_password, .. }, ConfirmPassword) => {
                Some(confirm_password)
            }
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        use FieldId::*;
        match (self, field) {
            (SignupForm::Individual { email, .. }, Email) => Some(email),
            (SignupForm::Individual { password, .. }, Password) => Some(password),
            (SignupForm::Individual { confirm_password, .. }, ConfirmPassword) => {
                Some(confirm_password)
            }
            (SignupForm::Organization { organization_name, .. }, OrganizationName) => {
                Some(organization_name)
            }
            (SignupForm::Organization { email, .. }, Email) => Some(email),
            (SignupForm::Organization { password, .. }, Password) => Some(password),
            (SignupForm::Organization { confirm_password, .. }, ConfirmPassword) => {
                Some(confirm_password)
            }
            (SignupForm::Student { admission_number, .. }, AdmissionNumber) => {
                Some(admission_number)
            }
            (SignupForm::Student { school_name, .. }, SchoolName) => Some(school_name),
            (SignupForm::Student { phone, .. }, Phone) => Some(phone),
            (SignupForm::Student { password, .. }, Password) => Some(password),
            (SignupForm::Student { confirm_password, .. }, ConfirmPassword) => {
                Some(confirm_password)
            }
            _ => None,
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            SignupForm::Individual { .. } => "Create Individual Account",
            SignupForm::Organization { .. } => "Register School & Go to Dashboard",
            SignupForm::Student { .. } => "Create Student Account",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginForm {
    Individual {
        email: String,
        phone: String,
    },
    Organization {
        email: String,
        phone: String,
    },
    Student {
        admission_number: String,
        phone: String,
        school_name: String,
    },
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::empty(Role::default())
    }
}

impl RoleForm for LoginForm {
    fn empty(role: Role) -> Self {
        match role {
            Role::Individual => LoginForm::Individual {
                email: String::new(),
                phone: String::new(),
            },
            Role::Organization => LoginForm::Organization {
                email: String::new(),
                phone: String::new(),
            },
            Role::Student => LoginForm::Student {
                admission_number: String::new(),
                phone: String::new(),
                school_name: String::new(),
            },
        }
    }

    fn role(&self) -> Role {
        match self {
            LoginForm::Individual { .. } => Role::Individual,
            LoginForm::Organization { .. } => Role::Organization,
            LoginForm::Student { .. } => Role::Student,
        }
    }

    fn fields(&self) -> &'static [FieldId] {
        use FieldId::*;
        match self {
            LoginForm::Individual { .. } | LoginForm::Organization { .. } => &[Email, Phone],
            LoginForm::Student { .. } => &[AdmissionNumber, Phone, SchoolName],
        }
    }

    fn slot(&self, field: FieldId) -> Option<&String> {
        use FieldId::*;
        match (self, field) {
            (LoginForm::Individual { email, .. } | LoginForm::Organization { email, .. }, Email) => {
                Some(email)
            }
            (LoginForm::Individual { phone, .. } | LoginForm::Organization { phone, .. }, Phone) => {
                Some(phone)
            }
            (LoginForm::Student { admission_number, .. }, AdmissionNumber) => {
                Some(admission_number)
            }
            (LoginForm::Student { phone, .. }, Phone) => Some(phone),
            (LoginForm::Student { school_name, .. }, SchoolName) => Some(school_name),
            _ => None,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> Option<&mut String> {
        use FieldId::*;
        match (self, field) {
            (LoginForm::Individual { email, .. } | LoginForm::Organization { email, .. }, Email) => {
                Some(email)
            }
            (LoginForm::Individual { phone, .. } | LoginForm::Organization { phone, .. }, Phone) => {
                Some(phone)
            }
            (LoginForm::Student { admission_number, .. }, AdmissionNumber) => {
                Some(admission_number)
            }
            (LoginForm::Student { phone, .. }, Phone) => Some(phone),
            (LoginForm::Student { school_name, .. }, SchoolName) => Some(school_name),
            _ => None,
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            LoginForm::Individual { .. } => "Login as Individual",
            LoginForm::Organization { .. } => "Login as Organization",
            LoginForm::Student { .. } => "Login as Student",
        }
    }
}

/// Captured values of a submitted form.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub role: Role,
    pub entries: Vec<(FieldId, String)>,
}

impl Submission {
    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn into_credentials(self) -> api::Credentials {
        api::Credentials {
            role: self.role.slug().to_string(),
            fields: self
                .entries
                .into_iter()
                .map(|(field, value)| (field.spec().html_id.to_string(), value))
                .collect(),
        }
    }
}

/// Log-safe rendering: `role=student admissionNumber="2025-001" password=***`.
impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "role={}", self.role)?;
        for (field, value) in &self.entries {
            if field.is_secret() {
                write!(f, " {}=***", field.spec().html_id)?;
            } else {
                write!(f, " {}={:?}", field.spec().html_id, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVERY_FIELD: [FieldId; 7] = [
        FieldId::OrganizationName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::AdmissionNumber,
        FieldId::SchoolName,
    ];

    fn assert_slots_match_fields<F: RoleForm>(form: &F) {
        for field in EVERY_FIELD {
            assert_eq!(
                form.slot(field).is_some(),
                form.fields().contains(&field),
                "{:?} visibility disagrees with storage for {:?}",
                field,
                form.role()
            );
        }
    }

    #[test]
    fn test_signup_field_sets_per_role() {
        use FieldId::*;
        assert_eq!(
            SignupForm::empty(Role::Individual).fields(),
            &[Email, Password, ConfirmPassword]
        );
        assert_eq!(
            SignupForm::empty(Role::Organization).fields(),
            &[OrganizationName, Email, Password, ConfirmPassword]
        );
        assert_eq!(
            SignupForm::empty(Role::Student).fields(),
            &[AdmissionNumber, SchoolName, Phone, Password, ConfirmPassword]
        );
    }

    #[test]
    fn test_login_field_sets_per_role() {
        use FieldId::*;
        assert_eq!(LoginForm::empty(Role::Individual).fields(), &[Email, Phone]);
        assert_eq!(LoginForm::empty(Role::Organization).fields(), &[Email, Phone]);
        assert_eq!(
            LoginForm::empty(Role::Student).fields(),
            &[AdmissionNumber, Phone, SchoolName]
        );
    }

    #[test]
    fn test_visible_fields_are_exactly_the_stored_fields() {
        for role in Role::ALL {
            assert_slots_match_fields(&SignupForm::empty(role));
            assert_slots_match_fields(&LoginForm::empty(role));
        }
    }

    #[test]
    fn test_set_rejects_hidden_field() {
        let mut form = SignupForm::empty(Role::Individual);
        assert!(!form.set(FieldId::OrganizationName, "Green Hills"));
        assert_eq!(form.value(FieldId::OrganizationName), "");
        assert!(form.set(FieldId::Email, "a@b.org"));
        assert_eq!(form.value(FieldId::Email), "a@b.org");
    }

    #[test]
    fn test_switch_role_drops_previous_values() {
        let mut form = SignupForm::empty(Role::Organization);
        form.set(FieldId::OrganizationName, "Green Hills");
        form.set(FieldId::Email, "head@greenhills.ac.ke");

        form.switch_role(Role::Individual);
        assert_eq!(form.role(), Role::Individual);
        assert_eq!(form.value(FieldId::Email), "");

        form.switch_role(Role::Organization);
        assert_eq!(form.value(FieldId::OrganizationName), "");
    }

    #[test]
    fn test_switch_to_same_role_keeps_values() {
        let mut form = LoginForm::empty(Role::Student);
        form.set(FieldId::AdmissionNumber, "2025-001");
        form.switch_role(Role::Student);
        assert_eq!(form.value(FieldId::AdmissionNumber), "2025-001");
    }

    #[test]
    fn test_submission_masks_passwords_when_displayed() {
        let mut form = SignupForm::empty(Role::Individual);
        form.set(FieldId::Email, "wanjiru@example.com");
        form.set(FieldId::Password, "hunter22");
        form.set(FieldId::ConfirmPassword, "hunter22");

        let submission = form.submission();
        assert_eq!(submission.value(FieldId::Password), Some("hunter22"));

        let record = submission.to_string();
        assert!(record.starts_with("role=individual"));
        assert!(record.contains("email=\"wanjiru@example.com\""));
        assert!(record.contains("password=***"));
        assert!(!record.contains("hunter22"));
    }

    #[test]
    fn test_submission_into_credentials_uses_html_ids() {
        let mut form = LoginForm::empty(Role::Student);
        form.set(FieldId::AdmissionNumber, "2025-001");
        form.set(FieldId::SchoolName, "Green Hills Elementary");

        let credentials = form.submission().into_credentials();
        assert_eq!(credentials.role, "student");
        assert_eq!(
            credentials.field_names(),
            vec!["admissionNumber", "phonenumber", "orgName"]
        );
    }

    #[test]
    fn test_submit_labels() {
        assert_eq!(
            SignupForm::empty(Role::Organization).submit_label(),
            "Register School & Go to Dashboard"
        );
        assert_eq!(LoginForm::empty(Role::Student).submit_label(), "Login as Student");
    }
}
