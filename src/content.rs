//! Grammar definitions loaded from JSON.
//!
//! A definition describes one grammar source: its entries (slot, groups,
//! alternatives) and its styles. Loading builds a fresh source, validates it
//! and only then registers it, so a bad definition never leaves a partly
//! filled source behind.
//!
//! ```json
//! {
//!   "source_id": 2882343476,
//!   "entries": [
//!     { "slot": 0, "groups": [
//!       { "bit_start": 0, "bit_count": 8, "alternatives": [
//!         { "weight": 50, "text": "North" },
//!         { "weight": 50, "entry": 1 }
//!       ] }
//!     ] }
//!   ],
//!   "styles": [ { "name": "Compass", "root": 0 } ]
//! }
//! ```

use serde::Deserialize;

use crate::builtin::BUILTIN_SOURCE_ID;
use crate::error::ContentError;
use crate::grammar::{
    Alternative, AlternativeGroup, GrammarEntry, GrammarRegistry, GrammarSource, Payload,
};

#[derive(Debug, Clone, Deserialize)]
pub struct SourceDef {
    pub source_id: u32,
    #[serde(default)]
    pub entries: Vec<EntryDef>,
    #[serde(default)]
    pub styles: Vec<StyleDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryDef {
    pub slot: u8,
    pub groups: Vec<GroupDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupDef {
    pub bit_start: u8,
    pub bit_count: u8,
    pub alternatives: Vec<AlternativeDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlternativeDef {
    pub weight: u8,
    #[serde(flatten)]
    pub payload: PayloadDef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadDef {
    Text(String),
    Entry(u8),
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleDef {
    pub name: String,
    pub root: u8,
}

impl SourceDef {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build and validate the grammar source this definition describes.
    pub fn build(&self) -> Result<GrammarSource, ContentError> {
        if self.source_id == BUILTIN_SOURCE_ID {
            return Err(ContentError::ReservedSourceId);
        }
        let mut source = GrammarSource::new(self.source_id);
        for entry in &self.entries {
            let groups = entry
                .groups
                .iter()
                .map(GroupDef::build)
                .collect::<Result<Vec<_>, _>>()?;
            source.set_entry(entry.slot, GrammarEntry::new(groups))?;
        }
        for style in &self.styles {
            source.add_style(style.name.clone(), style.root)?;
        }
        source.validate()?;
        Ok(source)
    }
}

impl GroupDef {
    fn build(&self) -> Result<AlternativeGroup, ContentError> {
        let alternatives = self
            .alternatives
            .iter()
            .map(|alt| Alternative {
                weight: alt.weight,
                payload: match &alt.payload {
                    PayloadDef::Text(text) => Payload::Literal(text.clone()),
                    PayloadDef::Entry(slot) => Payload::Reference(*slot),
                },
            })
            .collect();
        AlternativeGroup::new(self.bit_start, self.bit_count, alternatives)
    }
}

/// Parse, build and register a grammar source, replacing any source with the
/// same id. Returns the source id. On error the registry is unchanged.
pub fn load_source_json(registry: &mut GrammarRegistry, json: &str) -> Result<u32, ContentError> {
    let def = SourceDef::from_json(json)?;
    let source = match def.build() {
        Ok(source) => source,
        Err(err) => {
            tracing::warn!("rejecting grammar source {:08X}: {err}", def.source_id);
            return Err(err);
        }
    };
    let source_id = source.source_id();
    tracing::debug!(
        "loaded grammar source {source_id:08X} with {} styles",
        source.style_count()
    );
    registry.insert(source);
    Ok(source_id)
}
