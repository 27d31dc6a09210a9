use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display name → row index, iterated in lexicographic key order.
///
/// Lowercased keys are computed once at construction for case-insensitive
/// substring scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, usize>", into = "BTreeMap<String, usize>")]
pub struct NameIndex {
    entries: BTreeMap<String, usize>,
    /// Lowercased keys, aligned with `entries` iteration order.
    folded: Vec<String>,
}

/// One name index entry as seen by a scan.
#[derive(Debug, Clone, Copy)]
pub struct NameEntry<'a> {
    pub name: &'a str,
    pub folded: &'a str,
    pub index: usize,
}

impl NameIndex {
    pub fn new(entries: BTreeMap<String, usize>) -> Self {
        let folded = entries.keys().map(|k| k.to_lowercase()).collect();
        Self { entries, folded }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest row index referenced by any key.
    pub fn max_index(&self) -> Option<usize> {
        self.entries.values().copied().max()
    }

    /// Entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = NameEntry<'_>> + '_ {
        self.entries
            .iter()
            .zip(&self.folded)
            .map(|((name, &index), folded)| NameEntry {
                name,
                folded,
                index,
            })
    }

    /// Rows in `0..n_rows` that no key points at.
    pub fn unkeyed_rows(&self, n_rows: usize) -> Vec<usize> {
        let mut keyed = vec![false; n_rows];
        for &idx in self.entries.values() {
            if let Some(slot) = keyed.get_mut(idx) {
                *slot = true;
            }
        }
        keyed
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| (!k).then_some(i))
            .collect()
    }
}

impl From<BTreeMap<String, usize>> for NameIndex {
    fn from(entries: BTreeMap<String, usize>) -> Self {
        Self::new(entries)
    }
}

impl From<NameIndex> for BTreeMap<String, usize> {
    fn from(index: NameIndex) -> Self {
        index.entries
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for NameIndex {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_sorted_order_with_folded_keys() {
        let idx: NameIndex = [("One Piece", 2), ("Bleach", 1), ("Naruto", 0)]
            .into_iter()
            .collect();
        let names: Vec<_> = idx.iter().map(|e| (e.name, e.folded, e.index)).collect();
        assert_eq!(
            names,
            vec![
                ("Bleach", "bleach", 1),
                ("Naruto", "naruto", 0),
                ("One Piece", "one piece", 2),
            ]
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let idx: NameIndex = [("Naruto", 0)].into_iter().collect();
        assert_eq!(idx.get("Naruto"), Some(0));
        assert_eq!(idx.get("naruto"), None);
    }

    #[test]
    fn reports_unkeyed_rows() {
        let idx: NameIndex = [("a", 0), ("b", 2)].into_iter().collect();
        assert_eq!(idx.unkeyed_rows(4), vec![1, 3]);
        assert_eq!(idx.max_index(), Some(2));
    }

    #[test]
    fn json_round_trip_rebuilds_folded_keys() {
        let idx: NameIndex = serde_json::from_str(r#"{"Dragon Ball": 3}"#).unwrap();
        assert_eq!(idx.iter().next().unwrap().folded, "dragon ball");
        assert_eq!(serde_json::to_string(&idx).unwrap(), r#"{"Dragon Ball":3}"#);
    }
}
