//! Email capability boundary.

#[cfg(test)]
use mockall::automock;

/// Determines whether a string is a well-formed email address.
///
/// Implementations are supplied by the caller (a regex, a DNS check, a
/// third-party library); the validation engine never implements this
/// check itself. The engine calls `is_valid` synchronously once per
/// candidate per validation pass, with no retries.
#[cfg_attr(test, automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, candidate: &str) -> bool;
}
