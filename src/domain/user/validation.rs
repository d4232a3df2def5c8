//! User validation rules.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::email::EmailValidator;
use crate::domain::errors::{codes, ValidationErrors};

use super::entity::User;

/// Local usernames: one leading word character followed by 1-49 word
/// characters, underscores, hyphens, or dots.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_][a-zA-Z0-9_.-]{1,49}$").unwrap());

/// Which format rule applies to usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernamePolicy {
    /// Usernames are local identifiers matching a fixed pattern.
    #[default]
    Local,
    /// Usernames are email addresses checked by the email capability.
    Email,
}

/// Checks user accounts and their person records for completeness.
///
/// Validation is a read-only query: it never mutates the account, never
/// fails, and reports every violation as a field-level rejection code.
/// Email syntax checking is delegated to the injected
/// [`EmailValidator`].
pub struct UserValidator {
    email_validator: Arc<dyn EmailValidator>,
}

impl UserValidator {
    pub fn new(email_validator: Arc<dyn EmailValidator>) -> Self {
        Self { email_validator }
    }

    /// Run every rule group against the account.
    ///
    /// All groups run unconditionally and their rejections are merged
    /// in a fixed order, so the result is reproducible for identical
    /// input.
    pub fn validate(&self, user: &User, policy: UsernamePolicy) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if user.retired && is_missing(user.retire_reason.as_deref()) {
            tracing::debug!("retired account has no retire reason");
            errors.reject("retireReason", codes::NULL);
        }
        errors.merge(self.validate_person(user));
        errors.merge(self.validate_username(user, policy));
        errors
    }

    fn validate_person(&self, user: &User) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let Some(person) = &user.person else {
            tracing::debug!("account has no person record");
            errors.reject("person", codes::NULL);
            return errors;
        };
        if person.gender.is_none() {
            errors.reject("person.gender", codes::NULL);
        }
        if person.dead.is_none() {
            errors.reject("person.dead", codes::NULL);
        }
        if person.voided.is_none() {
            errors.reject("person.voided", codes::NULL);
        }
        if is_missing(person.person_name.as_deref()) {
            errors.reject("person", codes::PERSON_NAME_LENGTH);
        }
        errors
    }

    fn validate_username(&self, user: &User, policy: UsernamePolicy) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let username = user.username.as_deref().unwrap_or_default();
        match policy {
            UsernamePolicy::Email => {
                // The capability decides every case, the empty string included.
                if !self.email_validator.is_valid(username) {
                    tracing::debug!(username, "username is not a well-formed email address");
                    errors.reject("username", codes::USERNAME_EMAIL);
                }
            }
            UsernamePolicy::Local => {
                // An unset username is not a format violation.
                if !username.is_empty() && !USERNAME_PATTERN.is_match(username) {
                    tracing::debug!(username, "username does not match the local pattern");
                    errors.reject("username", codes::USERNAME_PATTERN);
                }
            }
        }
        let email = user.email.as_deref().unwrap_or_default();
        if !email.is_empty() && !self.email_validator.is_valid(email) {
            tracing::debug!(email, "email address is not well-formed");
            errors.reject("email", codes::EMAIL_INVALID);
        }
        errors
    }
}

fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
