//! Login form state
//!
//! Everything here is synchronous and free of I/O. The page component owns a
//! [`FormState`] in a signal and drives it from input events; the login
//! controller drives it around the remote call.

use crate::i18n::Translate;
use mayoor_common::LoginVariables;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Username, Field::Password];

    /// Form control name
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Password => "password",
        }
    }

    /// Translation key of the placeholder label
    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }

    fn required_key(&self) -> &'static str {
        match self {
            Field::Username => "username_required",
            Field::Password => "password_required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub username: String,
    pub password: String,
}

impl FormValues {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
        }
    }

    pub fn to_variables(&self) -> LoginVariables {
        LoginVariables::from_form(self.username.clone(), self.password.clone())
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Field to localized problem description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }
}

/// Fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields(BTreeSet<Field>);

impl TouchedFields {
    pub fn touch(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(Field::ALL);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Presence check of both fields
pub fn validate(values: &FormValues, tr: &impl Translate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if values.get(field).is_empty() {
            errors.insert(field, tr.translate(field.required_key()));
        }
    }
    errors
}

/// Visual intent of a form group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    None,
    Danger,
}

impl Intent {
    pub fn class(&self) -> &'static str {
        match self {
            Intent::None => "intent-none",
            Intent::Danger => "intent-danger",
        }
    }
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    LoggedIn,
    /// The server rejected the credentials for a reason tied to one field
    Rejected { field: Field, message_key: &'static str },
    /// Any other failure, or a response without a login payload
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: FormValues,
    errors: ValidationErrors,
    touched: TouchedFields,
    loading: bool,
    general_error: Option<String>,
}

impl FormState {
    /// Empty, untouched form. Errors for the empty fields exist from the start
    /// but stay hidden until the fields are touched.
    pub fn new(tr: &impl Translate) -> Self {
        let values = FormValues::default();
        let errors = validate(&values, tr);
        Self {
            values,
            errors,
            touched: TouchedFields::default(),
            loading: false,
            general_error: None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.loading
    }

    pub fn handle_change(&mut self, field: Field, value: impl Into<String>, tr: &impl Translate) {
        self.values.set(field, value.into());
        self.errors = validate(&self.values, tr);
        self.general_error = None;
    }

    /// Mark `field` touched. Errors are left as they are, including any the
    /// server attached after a rejected login.
    pub fn handle_blur(&mut self, field: Field) {
        self.touched.touch(field);
    }

    /// Error text to show under `field`, only once it has been touched
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn intent(&self, field: Field) -> Intent {
        if self.visible_error(field).is_some() {
            Intent::Danger
        } else {
            Intent::None
        }
    }

    /// Touch every field and revalidate. Returns the credentials to send and
    /// enters the loading state if the form is valid.
    pub fn begin_submit(&mut self, tr: &impl Translate) -> Option<LoginVariables> {
        self.touched.touch_all();
        self.errors = validate(&self.values, tr);
        self.general_error = None;

        if !self.is_valid() {
            tracing::debug!(errors = self.errors.len(), "login form submitted with invalid values");
            return None;
        }

        self.loading = true;
        Some(self.values.to_variables())
    }

    /// Leave the loading state and apply whatever feedback `outcome` carries.
    /// Runs for every outcome.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome, tr: &impl Translate, report_unknown: bool) {
        self.loading = false;

        match outcome {
            SubmitOutcome::Rejected { field, message_key } => {
                self.errors.insert(*field, tr.translate(message_key));
            }
            SubmitOutcome::Unrecognized if report_unknown => {
                self.general_error = Some(tr.translate("login_failed"));
            }
            SubmitOutcome::Unrecognized | SubmitOutcome::LoggedIn | SubmitOutcome::Invalid => {}
        }
    }
}
