/// Splits a comma-separated header list, trimming entries and dropping empty ones.
pub(crate) fn split_header_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
