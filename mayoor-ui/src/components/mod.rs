mod credential_field;
mod language_switch;

pub use credential_field::CredentialField;
pub use language_switch::{stored_language, LanguageSwitch};
