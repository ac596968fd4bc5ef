//! Project and package name validation.
//!
//! Generated projects embed the package name in module paths, so it must be
//! a plain identifier: `[A-Za-z_][A-Za-z0-9_]*`. The project name only has
//! to be a sane directory name.

use crate::domain::error::DomainError;

/// Check that `name` can be used as the project directory name.
///
/// Rejects empty names, hidden-directory names, and anything containing a
/// path separator.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let reason = if name.is_empty() {
        "name cannot be empty"
    } else if name.starts_with('.') {
        "name cannot start with '.'"
    } else if name.contains(['/', '\\']) {
        "name cannot contain path separators"
    } else {
        return Ok(());
    };
    Err(DomainError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    })
}

/// Check whether `candidate` is a valid package identifier.
///
/// True iff the string is non-empty, starts with a letter or underscore,
/// and contains only letters, digits, and underscores.
pub fn validate_package_name(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derive a candidate package name from a project name.
///
/// Hyphens and spaces become underscores. The result is a *candidate* only:
/// callers must re-validate it with [`validate_package_name`] and fall back
/// to asking the user directly when the derivation is still invalid.
pub fn derive_package_name(project_name: &str) -> String {
    project_name.replace(['-', ' '], "_")
}
