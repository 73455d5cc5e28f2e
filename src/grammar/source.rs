use super::{GrammarEntry, MAX_ENTRIES, MAX_STYLES, Style};
use crate::error::ContentError;

/// The grammar rules and styles contributed by one content package.
///
/// Entries live in fixed slots `0..MAX_ENTRIES`; styles are numbered in
/// declaration order. Everything here is owned by the source and dropped
/// with it.
#[derive(Debug, Clone)]
pub struct GrammarSource {
    source_id: u32,
    entries: Vec<GrammarEntry>,
    styles: Vec<Style>,
}

impl GrammarSource {
    pub fn new(source_id: u32) -> Self {
        Self {
            source_id,
            entries: vec![GrammarEntry::default(); MAX_ENTRIES],
            styles: Vec::new(),
        }
    }

    pub fn source_id(&self) -> u32 {
        self.source_id
    }

    /// Add or replace the entry in `slot`.
    pub fn set_entry(&mut self, slot: u8, entry: GrammarEntry) -> Result<(), ContentError> {
        let index = check_slot(slot)?;
        self.entries[index] = entry;
        Ok(())
    }

    /// The entry in `slot`, or `None` if the slot is out of range or was never filled.
    pub fn entry(&self, slot: u8) -> Option<&GrammarEntry> {
        self.entries
            .get(usize::from(slot))
            .filter(|entry| !entry.is_empty())
    }

    /// Append a style and return its index within this source.
    pub fn add_style(&mut self, name: impl Into<String>, root: u8) -> Result<u16, ContentError> {
        check_slot(root)?;
        if self.styles.len() >= MAX_STYLES {
            return Err(ContentError::TooManyStyles {
                source_id: self.source_id,
                max: MAX_STYLES,
            });
        }
        self.styles.push(Style {
            name: name.into(),
            root,
        });
        Ok((self.styles.len() - 1) as u16)
    }

    pub fn style(&self, style: u16) -> Option<&Style> {
        self.styles.get(usize::from(style))
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Check that every reference and every style root names a filled entry.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (from, entry) in self.entries.iter().enumerate() {
            for group in &entry.groups {
                for target in group.references() {
                    if self.entry(target).is_none() {
                        return Err(ContentError::DanglingReference {
                            from: from as u8,
                            target,
                        });
                    }
                }
            }
        }
        for (index, style) in self.styles.iter().enumerate() {
            if self.entry(style.root).is_none() {
                return Err(ContentError::UndefinedRoot {
                    style: index as u16,
                    root: style.root,
                });
            }
        }
        Ok(())
    }
}

fn check_slot(slot: u8) -> Result<usize, ContentError> {
    let index = usize::from(slot);
    if index >= MAX_ENTRIES {
        return Err(ContentError::SlotOutOfRange {
            slot: u32::from(slot),
            max: MAX_ENTRIES,
        });
    }
    Ok(index)
}
