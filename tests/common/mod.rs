use townname_gen::{Alternative, AlternativeGroup, GrammarEntry, GrammarRegistry, GrammarSource};

pub const COMPASS_ID: u32 = 0xABCD_1234;
pub const VILLAGE_ID: u32 = 0x5649_4C31;

/// The two-way "North"/"South" grammar.
pub fn compass_source() -> GrammarSource {
    let mut source = GrammarSource::new(COMPASS_ID);
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

/// A three-level grammar: optional prefix, stem, suffix entry.
pub const VILLAGE_JSON: &str = r#"{
    "source_id": 1447644209,
    "entries": [
        { "slot": 0, "groups": [
            { "bit_start": 0, "bit_count": 4, "alternatives": [
                { "weight": 6, "entry": 1 },
                { "weight": 10, "text": "" }
            ] },
            { "bit_start": 4, "bit_count": 8, "alternatives": [
                { "weight": 20, "text": "Ash" },
                { "weight": 20, "text": "Brook" },
                { "weight": 20, "text": "Elm" },
                { "weight": 20, "text": "Thorn" },
                { "weight": 20, "text": "Wold" }
            ] },
            { "bit_start": 12, "bit_count": 6, "alternatives": [
                { "weight": 40, "entry": 2 },
                { "weight": 24, "text": "ton" }
            ] }
        ] },
        { "slot": 1, "groups": [
            { "bit_start": 18, "bit_count": 3, "alternatives": [
                { "weight": 1, "text": "Great " },
                { "weight": 1, "text": "Little " },
                { "weight": 1, "text": "Upper " }
            ] }
        ] },
        { "slot": 2, "groups": [
            { "bit_start": 21, "bit_count": 5, "alternatives": [
                { "weight": 10, "text": "ford" },
                { "weight": 10, "text": "bury" },
                { "weight": 10, "text": "ley" },
                { "weight": 10, "text": "wick" }
            ] }
        ] }
    ],
    "styles": [
        { "name": "Village", "root": 0 },
        { "name": "Suffix only", "root": 2 }
    ]
}"#;

pub fn registry_with_village() -> GrammarRegistry {
    let mut registry = GrammarRegistry::new();
    registry.insert(compass_source());
    townname_gen::load_source_json(&mut registry, VILLAGE_JSON).unwrap();
    registry
}
