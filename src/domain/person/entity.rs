//! Person entity.

use serde::{Deserialize, Serialize};

/// Demographic record attached to a user account.
///
/// Every field is optional: records arrive incrementally from
/// registration flows and are only required to be complete once the
/// owning account is validated. `dead` and `voided` are tri-state -
/// an absent value is distinct from both `true` and `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    /// Administrative gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Whether the person is deceased; `None` means not yet recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead: Option<bool>,

    /// Soft-delete marker; `None` means not yet recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voided: Option<bool>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_dead(mut self, dead: bool) -> Self {
        self.dead = Some(dead);
        self
    }

    pub fn with_voided(mut self, voided: bool) -> Self {
        self.voided = Some(voided);
        self
    }

    pub fn with_person_name(mut self, name: impl Into<String>) -> Self {
        self.person_name = Some(name.into());
        self
    }
}
