//! User account entity.

use serde::{Deserialize, Serialize};

use crate::domain::person::Person;

/// A user account and its owned person record.
///
/// Accounts may hold incomplete or inconsistent data between edits;
/// consistency is checked by [`UserValidator`](super::UserValidator) as
/// a separate, read-only query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Whether the account has been retired.
    pub retired: bool,

    /// Why the account was retired; required whenever `retired` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retire_reason: Option<String>,

    /// Login identifier; its format depends on the configured policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The person this account belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retired(mut self, retired: bool) -> Self {
        self.retired = retired;
        self
    }

    pub fn with_retire_reason(mut self, reason: impl Into<String>) -> Self {
        self.retire_reason = Some(reason.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }
}
