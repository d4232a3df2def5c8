//! `check` subcommand: validate user records stored as JSON files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::domain::{User, UserValidator, UsernamePolicy, ValidationErrors};
use crate::infrastructure::email::RegexEmailValidator;
use crate::infrastructure::logging::init_logging;

#[derive(Args)]
pub struct CheckArgs {
    /// JSON files each holding a user record or an array of user records
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat usernames as email addresses, overriding the configuration
    #[arg(long)]
    pub email_as_username: bool,

    /// Emit rejections as JSON lines instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Returned when any record had rejections; `main` maps it to a
/// nonzero exit status.
#[derive(Debug, Error)]
#[error("{invalid} of {total} user records failed validation")]
pub struct ValidationFailed {
    pub invalid: usize,
    pub total: usize,
}

/// A record file is either one user object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Single(Box<User>),
    Many(Vec<User>),
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging);

    let policy = if args.email_as_username {
        UsernamePolicy::Email
    } else {
        config.policy.username_policy()
    };
    let validator = UserValidator::new(Arc::new(RegexEmailValidator));

    let mut total = 0;
    let mut invalid = 0;
    for path in &args.files {
        let users = read_records(path)?;
        tracing::info!(file = %path.display(), records = users.len(), "checking user records");
        for (index, user) in users.iter().enumerate() {
            total += 1;
            let errors = validator.validate(user, policy);
            if errors.has_errors() {
                invalid += 1;
                report(path, index, &errors, args.json)?;
            }
        }
    }

    if invalid > 0 {
        return Err(ValidationFailed { invalid, total }.into());
    }
    tracing::info!(records = total, "all user records passed validation");
    Ok(())
}

fn read_records(path: &Path) -> anyhow::Result<Vec<User>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: RecordFile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid user record in {}", path.display()))?;
    Ok(match parsed {
        RecordFile::Single(user) => vec![*user],
        RecordFile::Many(users) => users,
    })
}

fn report(path: &Path, index: usize, errors: &ValidationErrors, json: bool) -> anyhow::Result<()> {
    if json {
        let line = serde_json::json!({
            "file": path.display().to_string(),
            "record": index,
            "errors": errors,
        });
        println!("{line}");
    } else {
        println!("{} [record {}]:", path.display(), index);
        for error in errors {
            println!("  {}: {}", error.field, error.code);
        }
    }
    Ok(())
}
