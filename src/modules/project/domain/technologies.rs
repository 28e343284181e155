/// Splits a comma-separated technology input into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept.
pub fn split_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_technologies`] for pre-filling an edit form.
pub fn join_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}
