//! Case-insensitive substring filtering.
//!
//! One filter implementation serves both panes (guide rows and emoji
//! cards). Items are never removed by filtering — callers keep the full
//! collection and work with the returned index list, so handlers and state
//! attached to hidden items survive a cleared query.

/// Whether an item's visible text matches the query.
///
/// The query is matched exactly as typed, so whitespace inside it is
/// significant. An empty query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty() || text.to_lowercase().contains(&needle)
}

/// Indices of items whose visible text matches the query, in input order.
pub fn filter_indices<'a, I>(texts: I, query: &str) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .enumerate()
        .filter(|(_, text)| matches(text, query))
        .map(|(idx, _)| idx)
        .collect()
}
