//! Member name validation.

/// Returns `true` when `name` is a valid JSON:API member name.
///
/// Member names must be non-empty, start and end with an ASCII
/// alphanumeric character, and may additionally contain `-` and `_` in
/// interior positions. This is the recommended character set; it is
/// exposed as a helper for embedders and is not part of the structural
/// rule sequences, which accept any member name the document supplies.
///
/// # Example
///
/// ```
/// use accord_document::is_valid_member_name;
///
/// assert!(is_valid_member_name("created-at"));
/// assert!(!is_valid_member_name("-created"));
/// assert!(!is_valid_member_name(""));
/// ```
#[must_use]
pub fn is_valid_member_name(name: &str) -> bool {
    let interior = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
    let Some(first) = name.chars().next() else {
        return false;
    };
    let Some(last) = name.chars().next_back() else {
        return false;
    };
    first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric() && name.chars().all(interior)
}
