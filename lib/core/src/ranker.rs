use crate::result::{ResultSet, SearchResult};
use std::cmp::Reverse;

/// Order results by total weight, highest first.
///
/// `sort_by_key` is stable: equal totals keep their insertion order.
pub fn rank(results: ResultSet) -> Vec<SearchResult> {
    let mut ranked = results.into_vec();
    ranked.sort_by_key(|r| Reverse(r.total_weight()));
    ranked
}
