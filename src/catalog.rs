use crate::builtin::{BUILTIN_SOURCE_ID, DEFAULT_BUILTIN_STYLE};
use crate::grammar::GrammarRegistry;

/// One style in the flat listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub source_id: u32,
    pub style: u16,
    pub name: &'a str,
}

/// Flat view over every style of every registered grammar source.
///
/// Sources are listed in registration order, styles in declaration order.
/// Nothing is cached; each call walks the registry.
#[derive(Debug, Clone, Copy)]
pub struct StyleCatalog<'a> {
    registry: &'a GrammarRegistry,
}

impl<'a> StyleCatalog<'a> {
    pub fn new(registry: &'a GrammarRegistry) -> Self {
        Self { registry }
    }

    pub fn entries(self) -> impl Iterator<Item = CatalogEntry<'a>> + 'a {
        self.registry.iter().flat_map(|source| {
            source
                .styles()
                .iter()
                .enumerate()
                .map(move |(i, style)| CatalogEntry {
                    source_id: source.source_id(),
                    style: i as u16,
                    name: style.name.as_str(),
                })
        })
    }

    /// Display names of all styles.
    pub fn list_all_styles(self) -> impl Iterator<Item = &'a str> + 'a {
        self.entries().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.registry.iter().map(|s| s.style_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn style_name(&self, flat_index: usize) -> Option<&'a str> {
        self.locate(flat_index).map(|entry| entry.name)
    }

    /// Source owning the style at `flat_index`, or the built-in source past the end.
    pub fn resolve_source_id(&self, flat_index: usize) -> u32 {
        self.locate(flat_index)
            .map_or(BUILTIN_SOURCE_ID, |entry| entry.source_id)
    }

    /// Local style index for `flat_index`, or the default built-in style past the end.
    pub fn resolve_style_within_source(&self, flat_index: usize) -> u16 {
        self.locate(flat_index)
            .map_or(DEFAULT_BUILTIN_STYLE, |entry| entry.style)
    }

    fn locate(&self, flat_index: usize) -> Option<CatalogEntry<'a>> {
        let mut index = flat_index;
        for source in self.registry.iter() {
            let count = source.style_count();
            if index < count {
                let style = &source.styles()[index];
                return Some(CatalogEntry {
                    source_id: source.source_id(),
                    style: index as u16,
                    name: style.name.as_str(),
                });
            }
            index -= count;
        }
        None
    }
}
