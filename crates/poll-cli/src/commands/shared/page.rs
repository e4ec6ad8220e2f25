/// Compute effective page size with precedence: local arg -> configured default.
#[must_use]
pub fn effective_size(local: Option<u32>, fallback: u32) -> u32 {
    local.unwrap_or(fallback)
}

/// Sort criteria from the command line, else the configured default.
/// A blank default means no sorting.
#[must_use]
pub fn effective_sort(local: &[String], fallback: &str) -> Vec<String> {
    if !local.is_empty() {
        return local.to_vec();
    }
    if fallback.trim().is_empty() {
        Vec::new()
    } else {
        vec![fallback.to_string()]
    }
}
