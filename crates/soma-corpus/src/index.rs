//! Text normalization and the inverted indices built over the corpus.

use std::collections::HashMap;

/// Normalizes a free-text query: trimmed and lower-cased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Splits text into lower-cased alphanumeric tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Maps a key to the ordered, de-duplicated positions of the entities
/// carrying it.
#[derive(Debug, Clone, Default)]
pub struct PostingIndex {
    postings: HashMap<String, Vec<usize>>,
}

impl PostingIndex {
    /// Positions must be inserted in ascending order.
    pub fn insert(&mut self, key: String, position: usize) {
        let list = self.postings.entry(key).or_default();
        if list.last() != Some(&position) {
            list.push(position);
        }
    }

    pub fn get(&self, key: &str) -> &[usize] {
        self.postings.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Intersection of sorted position lists.
pub fn intersect_sorted(lists: &[&[usize]]) -> Vec<usize> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    first
        .iter()
        .copied()
        .filter(|position| rest.iter().all(|list| list.binary_search(position).is_ok()))
        .collect()
}
