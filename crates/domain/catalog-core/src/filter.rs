use crate::CatalogEntry;

/// Positions (into `entries`) of every entry whose lower-cased name contains the lower-cased
/// `term`. Source order is preserved; an empty term selects everything.
pub fn filter_indices(entries: &[CatalogEntry], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..entries.len()).collect();
    }

    let needle = term.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.name.to_lowercase().contains(&needle))
        .map(|(ix, _)| ix)
        .collect()
}

pub fn filter_entries<'a>(entries: &'a [CatalogEntry], term: &str) -> Vec<&'a CatalogEntry> {
    filter_indices(entries, term)
        .into_iter()
        .map(|ix| &entries[ix])
        .collect()
}

/// Memoized filtered view.
///
/// `key` identifies the entry sequence (e.g. the id of the load cycle that produced it). The
/// cached indices are reused as long as both the key and the term are unchanged.
#[derive(Debug, Clone)]
pub struct FilterMemo<K> {
    cached: Option<(K, String)>,
    indices: Vec<usize>,
    recomputations: u64,
}

impl<K> Default for FilterMemo<K> {
    fn default() -> Self {
        Self {
            cached: None,
            indices: Vec::new(),
            recomputations: 0,
        }
    }
}

impl<K: PartialEq + Clone> FilterMemo<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, key: &K, entries: &[CatalogEntry], term: &str) -> &[usize] {
        let fresh = matches!(&self.cached, Some((k, t)) if k == key && t == term);
        if !fresh {
            self.indices = filter_indices(entries, term);
            self.cached = Some((key.clone(), term.to_string()));
            self.recomputations += 1;
        }
        &self.indices
    }

    /// Drop the cached view so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
        self.indices.clear();
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
