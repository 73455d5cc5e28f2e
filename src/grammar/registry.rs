use indexmap::IndexMap;

use super::GrammarSource;

/// All loaded grammar sources, keyed by source id.
///
/// Iteration follows registration order, which the style catalog depends on.
/// Mutation happens only while content is loaded or unloaded; rendering
/// borrows the registry immutably.
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    sources: IndexMap<u32, GrammarSource>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The source for `source_id`, creating an empty one if needed.
    pub fn get_or_create(&mut self, source_id: u32) -> &mut GrammarSource {
        self.sources.entry(source_id).or_insert_with(|| {
            tracing::debug!("registering grammar source {source_id:08X}");
            GrammarSource::new(source_id)
        })
    }

    pub fn get(&self, source_id: u32) -> Option<&GrammarSource> {
        self.sources.get(&source_id)
    }

    pub fn get_mut(&mut self, source_id: u32) -> Option<&mut GrammarSource> {
        self.sources.get_mut(&source_id)
    }

    pub fn contains(&self, source_id: u32) -> bool {
        self.sources.contains_key(&source_id)
    }

    /// Register a fully built source, replacing any existing one with the same
    /// id in place so catalog order is unchanged.
    pub fn insert(&mut self, source: GrammarSource) {
        let source_id = source.source_id();
        if self.sources.insert(source_id, source).is_some() {
            tracing::debug!("replaced grammar source {source_id:08X}");
        } else {
            tracing::debug!("registered grammar source {source_id:08X}");
        }
    }

    /// Drop a source and everything it owns. No-op if absent.
    pub fn remove(&mut self, source_id: u32) {
        if self.sources.shift_remove(&source_id).is_some() {
            tracing::debug!("removed grammar source {source_id:08X}");
        }
    }

    pub fn clear(&mut self) {
        tracing::debug!("clearing {} grammar sources", self.sources.len());
        self.sources.clear();
    }

    /// Sources in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GrammarSource> {
        self.sources.values()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_returns_same_source() {
        let mut registry = GrammarRegistry::new();
        registry.get_or_create(0x1234).add_style("First", 0).unwrap();
        registry.get_or_create(0x1234).add_style("Second", 0).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0x1234).unwrap().style_count(), 2);
    }

    #[test]
    fn get_does_not_create() {
        let registry = GrammarRegistry::new();
        assert!(registry.get(0x1234).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_then_get_is_absent() {
        let mut registry = GrammarRegistry::new();
        registry.get_or_create(1);
        registry.get_or_create(2);
        registry.remove(1);
        assert!(registry.get(1).is_none());
        assert!(registry.contains(2));
        // Removing again is harmless.
        registry.remove(1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut registry = GrammarRegistry::new();
        registry.get_or_create(1);
        registry.get_or_create(2);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = GrammarRegistry::new();
        for id in [30, 10, 20] {
            registry.get_or_create(id);
        }
        registry.remove(10);
        registry.get_or_create(5);
        let ids: Vec<u32> = registry.iter().map(|s| s.source_id()).collect();
        assert_eq!(ids, vec![30, 20, 5]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut registry = GrammarRegistry::new();
        registry.get_or_create(1);
        registry.get_or_create(2);
        let mut replacement = GrammarSource::new(1);
        replacement.add_style("Fresh", 0).unwrap();
        registry.insert(replacement);
        let ids: Vec<u32> = registry.iter().map(|s| s.source_id()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(registry.get(1).unwrap().style_count(), 1);
    }
}
