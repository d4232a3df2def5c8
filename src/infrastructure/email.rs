//! Regex-backed email checker.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::email::EmailValidator;

/// Structural shape accepted as an email address: a single `@`, a
/// non-empty local part, and a dotted domain. Not a full RFC 5321
/// grammar.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").unwrap());

/// Default [`EmailValidator`] backed by a compiled-once pattern.
///
/// Callers with stricter requirements (deliverability checks,
/// allow-lists) inject their own implementation instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, candidate: &str) -> bool {
        EMAIL_PATTERN.is_match(candidate)
    }
}
