/// Suggestions from `pool` that contain `query` (case-insensitive) and are
/// not already in `selected`, in pool order.
pub fn filter_suggestions<'a>(pool: &'a [String], query: &str, selected: &[String]) -> Vec<&'a str> {
    let query_lower = query.to_lowercase();

    pool.iter()
        .filter(|suggestion| suggestion.to_lowercase().contains(&query_lower))
        .filter(|suggestion| !selected.contains(*suggestion))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
