//! EMR User Domain
//!
//! Validation for healthcare user accounts and their person records:
//! - Required-field and retirement-consistency checks
//! - Username format policies (local identifier pattern or email-as-username)
//! - Email well-formedness through an injected capability
//! - Stable field-level rejection codes for downstream message catalogs

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    codes, EmailValidator, FieldError, Person, User, UserValidator, UsernamePolicy,
    ValidationErrors,
};
pub use infrastructure::email::RegexEmailValidator;
