//! Helpers for turning `validator` results into readable messages.

use validator::{ValidationErrors, ValidationErrorsKind};

/// Maximum length of `users.name`, `people.name` and `planet.name`.
pub const NAME_MAX_LEN: u64 = 50;

/// Maximum length of `users.email`.
pub const EMAIL_MAX_LEN: u64 = 120;

/// Flatten validation errors into a single `field: message` list.
///
/// Fields are sorted so the output is stable across runs.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(field_errors) = kind {
            for err in field_errors {
                let detail = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                parts.push(format!("{field}: {detail}"));
            }
        }
    }

    parts.sort();
    parts.join("; ")
}
