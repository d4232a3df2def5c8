//! Person domain
//!
//! Demographic record owned by a user account.

mod entity;

pub use entity::Person;
