//! Chord Catalog
//!
//! Deterministic enumeration of the chord names the finder knows:
//! every root spelling crossed with every quality suffix, plus any
//! extra suffixes supplied through the builder.

use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Number of root spellings (naturals, sharps, and flats)
const NUM_ROOTS: usize = 17;

/// Number of quality suffixes
const NUM_QUALITIES: usize = 18;

/// Root spellings in catalog order: naturals, then sharps, then flats
pub const ROOTS: [Root; NUM_ROOTS] = [
    Root::C,
    Root::D,
    Root::E,
    Root::F,
    Root::G,
    Root::A,
    Root::B,
    Root::Cs,
    Root::Ds,
    Root::Fs,
    Root::Gs,
    Root::As,
    Root::Db,
    Root::Eb,
    Root::Gb,
    Root::Ab,
    Root::Bb,
];

/// Quality suffixes in catalog order
pub const QUALITIES: [Quality; NUM_QUALITIES] = [
    Quality::Major,
    Quality::Minor,
    Quality::DominantSeventh,
    Quality::MajorSeventh,
    Quality::MinorSeventh,
    Quality::Diminished,
    Quality::DiminishedSeventh,
    Quality::HalfDiminished,
    Quality::Augmented,
    Quality::MajorSixth,
    Quality::MinorSixth,
    Quality::DominantNinth,
    Quality::MinorNinth,
    Quality::Eleventh,
    Quality::Thirteenth,
    Quality::SuspendedSecond,
    Quality::SuspendedFourth,
    Quality::AddedNinth,
];

/// Root pitch spellings recognized at the start of a chord name.
///
/// Sharp and flat spellings are distinct entries so users can type
/// either enharmonic form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Root {
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
    /// A
    A,
    /// B
    B,
    /// C sharp (C#)
    Cs,
    /// D sharp (D#)
    Ds,
    /// F sharp (F#)
    Fs,
    /// G sharp (G#)
    Gs,
    /// A sharp (A#)
    As,
    /// D flat (Db)
    Db,
    /// E flat (Eb)
    Eb,
    /// G flat (Gb)
    Gb,
    /// A flat (Ab)
    Ab,
    /// B flat (Bb)
    Bb,
}

impl Root {
    /// Canonical spelling of this root, e.g. `"F#"` or `"Bb"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Root::C => "C",
            Root::D => "D",
            Root::E => "E",
            Root::F => "F",
            Root::G => "G",
            Root::A => "A",
            Root::B => "B",
            Root::Cs => "C#",
            Root::Ds => "D#",
            Root::Fs => "F#",
            Root::Gs => "G#",
            Root::As => "A#",
            Root::Db => "Db",
            Root::Eb => "Eb",
            Root::Gb => "Gb",
            Root::Ab => "Ab",
            Root::Bb => "Bb",
        }
    }
}

impl Display for Root {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chord qualities recognized after the root.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quality {
    /// Major triad; the empty suffix (e.g., C)
    Major,
    /// Minor triad (e.g., Cm)
    Minor,
    /// Dominant seventh (e.g., C7)
    DominantSeventh,
    /// Major seventh (e.g., Cmaj7)
    MajorSeventh,
    /// Minor seventh (e.g., Cm7)
    MinorSeventh,
    /// Diminished triad (e.g., Cdim)
    Diminished,
    /// Fully diminished seventh (e.g., Cdim7)
    DiminishedSeventh,
    /// Half-diminished seventh (e.g., Cm7b5)
    HalfDiminished,
    /// Augmented triad (e.g., Caug)
    Augmented,
    /// Major sixth (e.g., C6)
    MajorSixth,
    /// Minor sixth (e.g., Cm6)
    MinorSixth,
    /// Dominant ninth (e.g., C9)
    DominantNinth,
    /// Minor ninth (e.g., Cm9)
    MinorNinth,
    /// Eleventh (e.g., C11)
    Eleventh,
    /// Thirteenth (e.g., C13)
    Thirteenth,
    /// Suspended second (e.g., Csus2)
    SuspendedSecond,
    /// Suspended fourth (e.g., Csus4)
    SuspendedFourth,
    /// Added ninth (e.g., Cadd9)
    AddedNinth,
}

impl Quality {
    /// Canonical suffix of this quality; empty for the major triad.
    pub const fn as_str(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::DominantSeventh => "7",
            Quality::MajorSeventh => "maj7",
            Quality::MinorSeventh => "m7",
            Quality::Diminished => "dim",
            Quality::DiminishedSeventh => "dim7",
            Quality::HalfDiminished => "m7b5",
            Quality::Augmented => "aug",
            Quality::MajorSixth => "6",
            Quality::MinorSixth => "m6",
            Quality::DominantNinth => "9",
            Quality::MinorNinth => "m9",
            Quality::Eleventh => "11",
            Quality::Thirteenth => "13",
            Quality::SuspendedSecond => "sus2",
            Quality::SuspendedFourth => "sus4",
            Quality::AddedNinth => "add9",
        }
    }

    /// Look up the quality with exactly this suffix, if any.
    ///
    /// The empty string resolves to [`Quality::Major`].
    pub fn from_suffix(suffix: &str) -> Option<Quality> {
        QUALITIES.iter().copied().find(|q| q.as_str() == suffix)
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors when parsing a chord name into its root and quality.
#[derive(Debug, Error)]
pub enum ChordNameError {
    /// The name did not start with a known root spelling.
    #[error("no known root pitch at the start of `{name}`")]
    UnknownRoot {
        /// The name that failed to parse.
        name: String,
    },

    /// The text after the root was not a known quality suffix.
    #[error("unknown quality suffix `{suffix}` after root {root}")]
    UnknownQuality {
        /// The root that was recognized.
        root: Root,
        /// The unrecognized remainder of the name.
        suffix: String,
    },
}

/// A chord name split into its generating root and quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsedChord {
    /// The root pitch spelling.
    pub root: Root,
    /// The quality suffix.
    pub quality: Quality,
}

impl ParsedChord {
    /// Reassemble the canonical chord name, e.g. `"F#maj7"`.
    pub fn name(&self) -> String {
        format!("{}{}", self.root, self.quality)
    }
}

/// Parse a canonical chord name into its `(root, quality)` pair.
///
/// Two-character root spellings win over their natural prefix, so
/// `"Dbm7"` parses as Db + m7 rather than failing on a `bm7` suffix.
/// Matching is case-sensitive; this operates on canonical names, not
/// user queries.
pub fn parse_chord_name(name: &str) -> Result<ParsedChord, ChordNameError> {
    let (root, suffix) = split_root(name).ok_or_else(|| ChordNameError::UnknownRoot {
        name: name.to_string(),
    })?;
    let quality = Quality::from_suffix(suffix).ok_or_else(|| ChordNameError::UnknownQuality {
        root,
        suffix: suffix.to_string(),
    })?;
    Ok(ParsedChord { root, quality })
}

/// Longest-first root match: sharps and flats before naturals.
fn split_root(name: &str) -> Option<(Root, &str)> {
    ROOTS
        .iter()
        .filter(|r| r.as_str().len() == 2)
        .chain(ROOTS.iter().filter(|r| r.as_str().len() == 1))
        .find_map(|&r| name.strip_prefix(r.as_str()).map(|rest| (r, rest)))
}

/// Builder for `ChordCatalog` to extend the quality cross-product
pub struct CatalogBuilder {
    extras: Vec<String>,
}

impl CatalogBuilder {
    /// Create a new builder with no extra suffixes
    pub fn new() -> Self {
        CatalogBuilder { extras: Vec::new() }
    }

    /// Add one extra suffix combined with every root (e.g. `"7b9"`)
    pub fn extra(mut self, suffix: impl Into<String>) -> Self {
        self.extras.push(suffix.into());
        self
    }

    /// Add several extra suffixes at once
    pub fn extras<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Build the `ChordCatalog`
    pub fn build(self) -> ChordCatalog {
        ChordCatalog::with_extras(&self.extras)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The deduplicated set of chord names the finder recognizes.
///
/// Generated once, root-major (every C chord, then every D chord, and
/// so on), and immutable afterwards. Callers should treat the order as
/// reproducible but otherwise unspecified.
#[derive(Debug, Clone)]
pub struct ChordCatalog {
    names: Vec<String>,
}

impl ChordCatalog {
    /// Return a builder to extend the catalog with extra suffixes
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Generate the default catalog: every root crossed with every
    /// quality, no extras.
    pub fn generate() -> Self {
        Self::with_extras(&[])
    }

    /// Cross every root with every quality and every extra suffix,
    /// keeping the first occurrence of any duplicate name.
    fn with_extras(extras: &[String]) -> Self {
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(NUM_ROOTS * (NUM_QUALITIES + extras.len()));

        for root in ROOTS {
            for quality in QUALITIES {
                push_unique(&mut names, &mut seen, format!("{root}{quality}"));
            }
            for extra in extras {
                push_unique(&mut names, &mut seen, format!("{root}{extra}"));
            }
        }

        ChordCatalog { names }
    }

    /// All names, in generation order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over the names as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of names in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the catalog holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Append `name` unless it was generated before
fn push_unique(names: &mut Vec<String>, seen: &mut HashSet<String>, name: String) {
    if seen.insert(name.clone()) {
        names.push(name);
    }
}
