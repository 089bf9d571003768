// src/core/sanitize.rs

/// "Maria dela Cruz" → "MDC". Upper-cased first letter of each word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
