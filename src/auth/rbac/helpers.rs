//! Normalization and token tables shared by the role matchers
//!
//! The classifier tables, the numeric level tables and the permission table are
//! deliberately kept apart: their token sets differ and each is matched on its own.

/// Exact tokens recognized as admin by the classifiers
pub(super) const ADMIN_ROLE_TOKENS: &[&str] = &[
    "admin",
    "administrator",
    "مدير",
    "مسؤول",
    "إداري",
];

/// Exact tokens recognized as editor by the classifiers
pub(super) const EDITOR_ROLE_TOKENS: &[&str] = &["editor", "محرر"];

/// Exact tokens recognized as viewer by the classifiers
pub(super) const VIEWER_ROLE_TOKENS: &[&str] = &["viewer", "مشاهد"];

/// Exact tokens scored as admin by the numeric level (no "إداري")
pub(super) const LEVEL_ADMIN_TOKENS: &[&str] = &["admin", "administrator", "مدير", "مسؤول"];

/// Exact tokens scored as moderator by the numeric level
pub(super) const LEVEL_MODERATOR_TOKENS: &[&str] = &["moderator", "مشرف"];

/// Lower-case and trim a raw role; a missing role becomes the empty string
pub(super) fn normalize_role(role: Option<&str>) -> String {
    role.unwrap_or_default().trim().to_lowercase()
}

/// Exact match against a token table, or substring match on `needle`
pub(super) fn matches_tokens(normalized: &str, tokens: &[&str], needle: &str) -> bool {
    tokens.contains(&normalized) || normalized.contains(needle)
}
