//! App name parsing and derivation rules shared by every command.

/// Split a comma-separated remote list into individual names.
///
/// Whitespace around each entry is trimmed and empty segments are dropped,
/// so `"cart, profile,"` and `"cart,profile"` parse the same.
pub fn parse_remotes(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a name satisfies the app naming pattern: one or more ASCII
/// letters, digits, or hyphens.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Capitalize the first character of a name.
///
/// This is the base for every generated component identifier: remote
/// `cart` yields `CartCounter` and `CartCard` in the host page.
pub fn identifier_base(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
