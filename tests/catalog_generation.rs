//! Integration tests for catalog generation: determinism, dedup,
//! extra suffixes, and the root/quality grammar.

use chord_finder::{
    parse_chord_name, ChordCatalog, ChordNameError, PrefixIndex, Quality, Root, QUALITIES, ROOTS,
};

#[test]
fn generates_the_full_root_quality_cross_product() {
    let catalog = ChordCatalog::generate();
    assert_eq!(catalog.len(), ROOTS.len() * QUALITIES.len());

    // Root-major order: qualities of the first root come first.
    assert_eq!(catalog.names()[0], "C");
    assert_eq!(catalog.names()[1], "Cm");
    assert_eq!(catalog.names().last().map(String::as_str), Some("Bbadd9"));
}

#[test]
fn generation_is_deterministic() {
    let a = ChordCatalog::generate();
    let b = ChordCatalog::generate();
    assert_eq!(a.names(), b.names());
}

#[test]
fn extra_suffixes_extend_every_root() {
    let base = ChordCatalog::generate().len();
    let catalog = ChordCatalog::builder().extra("7b9").build();
    assert_eq!(catalog.len(), base + ROOTS.len());
    assert!(catalog.iter().any(|n| n == "C7b9"));
    assert!(catalog.iter().any(|n| n == "Bb7b9"));

    let catalog = ChordCatalog::builder().extras(["7b9", "maj9"]).build();
    assert_eq!(catalog.len(), base + 2 * ROOTS.len());
}

#[test]
fn duplicate_extras_collapse() {
    let base = ChordCatalog::generate().len();
    // "m" already comes out of the quality cross-product.
    let catalog = ChordCatalog::builder().extra("m").build();
    assert_eq!(catalog.len(), base);
}

#[test]
fn extras_are_reachable_through_the_index() {
    let catalog = ChordCatalog::builder().extra("7b9").build();
    let index = PrefixIndex::build(catalog.names());
    assert!(index.contains("c7b9"));
    assert_eq!(index.suggest("c7b", 5), ["C7b9"]);
}

#[test]
fn every_name_parses_back_to_its_generating_pair() {
    let catalog = ChordCatalog::generate();
    for name in catalog.names() {
        let parsed = parse_chord_name(name)
            .unwrap_or_else(|e| panic!("`{name}` failed to parse: {e}"));
        assert_eq!(parsed.name(), *name);
        assert!(name.starts_with(parsed.root.as_str()));
    }
}

#[test]
fn flat_spellings_win_over_their_natural_prefix() {
    let parsed = parse_chord_name("Dbm7").unwrap();
    assert_eq!(parsed.root, Root::Db);
    assert_eq!(parsed.quality, Quality::MinorSeventh);
}

#[test]
fn parse_rejects_names_outside_the_grammar() {
    assert!(matches!(
        parse_chord_name("Hmaj7"),
        Err(ChordNameError::UnknownRoot { .. })
    ));
    assert!(matches!(
        parse_chord_name(""),
        Err(ChordNameError::UnknownRoot { .. })
    ));
    assert!(matches!(
        parse_chord_name("Cx"),
        Err(ChordNameError::UnknownQuality { .. })
    ));
    // B# is not a generated spelling; the `#` is left over after B.
    assert!(matches!(
        parse_chord_name("B#"),
        Err(ChordNameError::UnknownQuality {
            root: Root::B,
            ..
        })
    ));
}

#[test]
fn quality_suffix_lookup() {
    assert_eq!(Quality::from_suffix(""), Some(Quality::Major));
    assert_eq!(Quality::from_suffix("maj7"), Some(Quality::MajorSeventh));
    assert_eq!(Quality::from_suffix("x"), None);
}

#[test]
fn roots_and_qualities_display_their_canonical_spelling() {
    assert_eq!(Root::Fs.to_string(), "F#");
    assert_eq!(Root::Bb.to_string(), "Bb");
    assert_eq!(Quality::Major.to_string(), "");
    assert_eq!(Quality::HalfDiminished.to_string(), "m7b5");
}
