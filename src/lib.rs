//! # chord_finder
//!
//! Generate the catalog of common chord names and search it by prefix
//! with minimal latency: exact membership and completion queries ignore
//! case, while results keep their canonical spelling.
//!
//! ## Example
//! ```rust
//! use chord_finder::{ChordCatalog, PrefixIndex};
//!
//! let catalog = ChordCatalog::generate();
//! let index = PrefixIndex::build(catalog.names());
//!
//! assert!(index.contains("Fmaj7"));
//! assert!(index.contains("fMAJ7"));
//!
//! let hits = index.suggest("c#m", 5);
//! assert_eq!(hits.first().map(String::as_str), Some("C#m"));
//! ```
//!
//! A process-wide catalog and index, built on first use and shared for
//! the lifetime of the program, backs the [`has_chord`],
//! [`suggest_chords`] and [`all_chord_names`] convenience functions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

use lazy_static::lazy_static;

/// Chord-name catalog API.
pub use catalog::{
    parse_chord_name, CatalogBuilder, ChordCatalog, ChordNameError, ParsedChord, Quality, Root,
    QUALITIES, ROOTS,
};

/// Case-insensitive prefix lookup tree.
pub use prefix_index::{PrefixIndex, DEFAULT_SUGGEST_LIMIT};

/// Diagram-registry key normalization.
pub use diagram::diagram_key;

/// Catalog generation module.
pub mod catalog;

/// Prefix lookup module.
pub mod prefix_index;

/// Diagram key module.
pub mod diagram;

lazy_static! {
    static ref CATALOG: ChordCatalog = ChordCatalog::generate();
    static ref INDEX: PrefixIndex = PrefixIndex::build(CATALOG.names());
}

/// Exact case-insensitive membership test against the default catalog.
pub fn has_chord(name: &str) -> bool {
    INDEX.contains(name)
}

/// Up to `limit` canonical-cased completions of `prefix` from the
/// default catalog. [`DEFAULT_SUGGEST_LIMIT`] is the conventional cap.
pub fn suggest_chords(prefix: &str, limit: usize) -> Vec<String> {
    INDEX.suggest(prefix, limit)
}

/// Every name in the default catalog, in generation order.
pub fn all_chord_names() -> &'static [String] {
    CATALOG.names()
}
