use std::collections::HashSet;

use rand::RngCore;

use crate::builtin::{BUILTIN_SOURCE_ID, BUILTIN_STYLE_COUNT, BuiltinStyle};
use crate::catalog::StyleCatalog;
use crate::config::TownNameConfig;
use crate::grammar::{GrammarRegistry, NameBuffer, expand};

/// Which generator names a town: a grammar source and one of its styles, or
/// the built-in source `0` and a built-in style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TownNameParams {
    pub source_id: u32,
    pub style: u16,
}

impl TownNameParams {
    pub fn builtin(style: BuiltinStyle) -> Self {
        Self {
            source_id: BUILTIN_SOURCE_ID,
            style: style as u16,
        }
    }

    /// Params for a town that recorded `source_id`/`style`. A grammar source
    /// that is no longer loaded falls back to the default built-in style.
    pub fn new(registry: &GrammarRegistry, source_id: u32, style: u16) -> Self {
        if source_id != BUILTIN_SOURCE_ID && !registry.contains(source_id) {
            tracing::warn!(
                "grammar source {source_id:08X} is not loaded, using built-in town names"
            );
            return Self::builtin(BuiltinStyle::DEFAULT);
        }
        Self { source_id, style }
    }

    /// Params for the flat style setting: built-in styles first, then every
    /// catalog style.
    pub fn from_setting(registry: &GrammarRegistry, setting: u16) -> Self {
        if setting < BUILTIN_STYLE_COUNT {
            return Self {
                source_id: BUILTIN_SOURCE_ID,
                style: setting,
            };
        }
        let catalog = StyleCatalog::new(registry);
        let flat_index = usize::from(setting - BUILTIN_STYLE_COUNT);
        Self {
            source_id: catalog.resolve_source_id(flat_index),
            style: catalog.resolve_style_within_source(flat_index),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.source_id == BUILTIN_SOURCE_ID
    }
}

/// Render the town name for `seed`.
///
/// Grammar lookups that fail are logged and replaced by the default built-in
/// name for the same seed, so a town always gets a name.
pub fn town_name(
    registry: &GrammarRegistry,
    params: &TownNameParams,
    seed: u32,
    config: &TownNameConfig,
) -> String {
    if params.is_builtin() {
        let style = BuiltinStyle::from_index(params.style).unwrap_or(BuiltinStyle::DEFAULT);
        return bounded(style.generate(seed), config.name_capacity);
    }
    match expand(
        registry,
        params.source_id,
        params.style,
        seed,
        config.name_capacity,
        config.max_recursion_depth,
    ) {
        Ok(name) => name,
        Err(err) => {
            tracing::warn!("town name lookup failed, using built-in name: {err}");
            bounded(BuiltinStyle::DEFAULT.generate(seed), config.name_capacity)
        }
    }
}

/// Check that the name for `seed` is short enough and not yet taken.
/// Accepted names are added to `taken`.
pub fn verify_town_name(
    registry: &GrammarRegistry,
    params: &TownNameParams,
    seed: u32,
    taken: &mut HashSet<String>,
    config: &TownNameConfig,
) -> bool {
    let name = town_name(registry, params, seed, config);
    if name.chars().count() >= config.max_name_chars {
        return false;
    }
    taken.insert(name)
}

/// Draw seeds from `rng` until one yields a valid, unused name. Returns the
/// seed and the name, or `None` after `config.max_attempts` tries.
pub fn generate_town_name(
    registry: &GrammarRegistry,
    params: &TownNameParams,
    rng: &mut dyn RngCore,
    taken: &mut HashSet<String>,
    config: &TownNameConfig,
) -> Option<(u32, String)> {
    for _ in 0..config.max_attempts {
        let seed = rng.next_u32();
        if verify_town_name(registry, params, seed, taken, config) {
            return Some((seed, town_name(registry, params, seed, config)));
        }
    }
    tracing::debug!(
        "no unique town name after {} attempts ({} names taken)",
        config.max_attempts,
        taken.len()
    );
    None
}

fn bounded(name: String, capacity: Option<usize>) -> String {
    let mut buf = NameBuffer::new(capacity);
    buf.push_str(&name);
    buf.into_string()
}
