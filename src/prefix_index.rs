//! Prefix Index
//!
//! Character-keyed lookup tree over a chord-name catalog. Paths are
//! case-folded on insertion so queries match in any casing; terminal
//! nodes keep the canonical spelling so results display exactly as
//! generated.

use std::collections::BTreeMap;

/// Default completion cap used by the crate-level convenience helpers.
pub const DEFAULT_SUGGEST_LIMIT: usize = 50;

/// One node of the lookup tree.
///
/// Children are keyed by a single case-folded character; `BTreeMap`
/// iteration gives the ascending-character traversal order that
/// [`PrefixIndex::suggest`] documents.
#[derive(Debug, Default)]
struct IndexNode {
    children: BTreeMap<char, IndexNode>,
    /// Canonical-cased name when the path from the tree root spells a
    /// complete catalog entry.
    canonical: Option<String>,
}

/// Case-insensitive prefix lookup over a fixed set of chord names.
///
/// Built once from a catalog and read-only afterwards; queries take no
/// locks and may run concurrently.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: IndexNode,
    len: usize,
}

impl PrefixIndex {
    /// Build an index over `names`, case-folding every character.
    ///
    /// Inserting a name twice leaves the index unchanged. When two
    /// distinct names case-fold to the same path, the first one
    /// inserted keeps the terminal slot.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PrefixIndex::default();
        for name in names {
            index.insert(name.as_ref());
        }
        index
    }

    fn insert(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in name.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.canonical.is_none() {
            node.canonical = Some(name.to_string());
            self.len += 1;
        }
    }

    /// Exact membership test, ignoring case.
    ///
    /// Walks the tree one folded character at a time and fails on the
    /// first unmatched character. The empty query is never a member.
    pub fn contains(&self, query: &str) -> bool {
        let mut node = &self.root;
        for ch in query.to_lowercase().chars() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.canonical.is_some()
    }

    /// Up to `limit` canonical-cased names starting with `prefix`.
    ///
    /// Results are collected depth-first from the node `prefix` reaches:
    /// a node's own entry before its children, children in ascending
    /// character order (`#` sorts before digits, digits before letters).
    /// The same arguments always yield the same sequence. An unmatched
    /// prefix or a `limit` of zero yields no results; the empty prefix
    /// matches the whole catalog.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();
        if limit == 0 {
            return results;
        }

        let mut node = &self.root;
        for ch in prefix.to_lowercase().chars() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => return results,
            }
        }

        collect(node, limit, &mut results);
        results
    }

    /// Number of distinct entries in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Depth-first completion walk, stopping once `limit` names are out
fn collect(node: &IndexNode, limit: usize, results: &mut Vec<String>) {
    if results.len() >= limit {
        return;
    }
    if let Some(name) = &node.canonical {
        results.push(name.clone());
    }
    for child in node.children.values() {
        if results.len() >= limit {
            break;
        }
        collect(child, limit, results);
    }
}
