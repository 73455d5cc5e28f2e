mod common;

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use townname_gen::{
    BUILTIN_STYLE_COUNT, BuiltinStyle, TownNameConfig, TownNameParams, generate_town_name,
    town_name,
};

use common::{VILLAGE_ID, registry_with_village};

#[test]
fn setting_selects_grammar_style() {
    let registry = registry_with_village();
    // Catalog order: Compass, Village, Suffix only.
    let params = TownNameParams::from_setting(&registry, BUILTIN_STYLE_COUNT + 1);
    assert_eq!(params.source_id, VILLAGE_ID);
    assert_eq!(params.style, 0);
    let config = TownNameConfig::default();
    assert_eq!(town_name(&registry, &params, 0, &config), "Woldton");
}

#[test]
fn unloading_content_falls_back_to_builtin() {
    let mut registry = registry_with_village();
    registry.remove(VILLAGE_ID);
    let params = TownNameParams::new(&registry, VILLAGE_ID, 0);
    assert_eq!(params, TownNameParams::builtin(BuiltinStyle::English));
    let config = TownNameConfig::default();
    assert_eq!(
        town_name(&registry, &params, 1234, &config),
        BuiltinStyle::English.generate(1234)
    );
}

#[test]
fn generated_names_are_unique_and_short() {
    let registry = registry_with_village();
    let params = TownNameParams::new(&registry, VILLAGE_ID, 0);
    let config = TownNameConfig::default();
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut taken = HashSet::new();

    let mut names = Vec::new();
    for _ in 0..20 {
        let (seed, name) =
            generate_town_name(&registry, &params, &mut rng, &mut taken, &config).unwrap();
        assert!(name.chars().count() < config.max_name_chars);
        assert_eq!(town_name(&registry, &params, seed, &config), name);
        names.push(name);
    }
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn same_rng_seed_same_names() {
    let registry = registry_with_village();
    let params = TownNameParams::builtin(BuiltinStyle::EnglishAdditional);
    let config = TownNameConfig::default();
    let run = || {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut taken = HashSet::new();
        (0..10)
            .filter_map(|_| generate_town_name(&registry, &params, &mut rng, &mut taken, &config))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
