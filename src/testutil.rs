use crate::grammar::{Alternative, AlternativeGroup, GrammarEntry, GrammarRegistry, GrammarSource};

// ---------------------------------------------------------------------------
// Grammar fixtures
// ---------------------------------------------------------------------------

pub const NORTH_SOUTH_ID: u32 = 0xABCD_1234;
pub const PREFIX_SUFFIX_ID: u32 = 0x0000_BEEF;

/// One entry, one 8-bit group: 50 -> "North", 50 -> "South".
pub fn north_south_source() -> GrammarSource {
    let mut source = GrammarSource::new(NORTH_SOUTH_ID);
    let group = AlternativeGroup::new(
        0,
        8,
        vec![
            Alternative::literal(50, "North"),
            Alternative::literal(50, "South"),
        ],
    )
    .unwrap();
    source.set_entry(0, GrammarEntry::new(vec![group])).unwrap();
    source.add_style("Compass", 0).unwrap();
    source
}

pub fn north_south_registry() -> GrammarRegistry {
    let mut registry = GrammarRegistry::new();
    registry.insert(north_south_source());
    registry
}

/// Slot 0 is "High"/"Low" (bits 0..4) followed by a reference to slot 1
/// "ton" or slot 2 "ford" (bits 4..8).
pub fn prefix_suffix_source() -> GrammarSource {
    let mut source = GrammarSource::new(PREFIX_SUFFIX_ID);
    let prefix = AlternativeGroup::new(
        0,
        4,
        vec![Alternative::literal(1, "High"), Alternative::literal(1, "Low")],
    )
    .unwrap();
    let suffix = AlternativeGroup::new(
        4,
        4,
        vec![Alternative::reference(1, 1), Alternative::reference(1, 2)],
    )
    .unwrap();
    source
        .set_entry(0, GrammarEntry::new(vec![prefix, suffix]))
        .unwrap();
    source.set_entry(1, literal_entry("ton")).unwrap();
    source.set_entry(2, literal_entry("ford")).unwrap();
    source.add_style("Prefix and suffix", 0).unwrap();
    source
}

pub fn prefix_suffix_registry() -> (GrammarRegistry, u32) {
    let mut registry = GrammarRegistry::new();
    registry.insert(prefix_suffix_source());
    (registry, PREFIX_SUFFIX_ID)
}

/// An entry that always produces `text`.
pub fn literal_entry(text: &str) -> GrammarEntry {
    GrammarEntry::new(vec![
        AlternativeGroup::new(0, 0, vec![Alternative::literal(1, text)]).unwrap(),
    ])
}

/// A source with `count` styles, all rooted at a single literal entry.
pub fn source_with_styles(source_id: u32, count: usize) -> GrammarSource {
    let mut source = GrammarSource::new(source_id);
    source.set_entry(0, literal_entry("Town")).unwrap();
    for i in 0..count {
        source
            .add_style(format!("{source_id:X} style {i}"), 0)
            .unwrap();
    }
    source
}
