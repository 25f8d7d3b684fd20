/// Normalize text by replacing control characters with spaces and normalizing whitespace
/// Used on spreadsheet headers so that "Customer\nRO" and "Customer  RO" name the same column
pub fn normalize_string(value: &str) -> String {
    return value
        .chars() // Process character by character
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace() // Split on whitespace to normalize multiple spaces
        .collect::<Vec<&str>>()
        .join(" ");
}

/// Strip one pair of matching surrounding quotes, as left behind by shells and
/// "copy as path" actions, from a user supplied path
pub fn strip_wrapping_quotes(value: &str) -> &str {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    return trimmed;
}

/// Join names for display, or "None" when there is nothing to list
pub fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        return "None".to_string();
    }
    return names.join(", ");
}
