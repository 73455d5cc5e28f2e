pub mod buffer;
pub mod expand;
pub mod registry;
pub mod source;

pub use buffer::NameBuffer;
pub use expand::{MAX_RECURSION_DEPTH, expand, extract_bits};
pub use registry::GrammarRegistry;
pub use source::GrammarSource;

use crate::error::ContentError;

/// Entry slots per grammar source.
pub const MAX_ENTRIES: usize = 128;
/// Styles per grammar source.
pub const MAX_STYLES: usize = 128;
/// Alternatives per group (the count is a single byte in the content format).
pub const MAX_ALTERNATIVES: usize = 255;
/// Weights are 7-bit values.
pub const MAX_WEIGHT: u8 = 0x7F;

/// What an alternative produces when it is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Appended to the name as-is.
    Literal(String),
    /// Expanded recursively from another entry of the same source.
    Reference(u8),
}

/// One weighted option within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub weight: u8,
    pub payload: Payload,
}

impl Alternative {
    pub fn literal(weight: u8, text: impl Into<String>) -> Self {
        Self {
            weight,
            payload: Payload::Literal(text.into()),
        }
    }

    pub fn reference(weight: u8, slot: u8) -> Self {
        Self {
            weight,
            payload: Payload::Reference(slot),
        }
    }
}

/// A weighted choice that draws its random value from `bit_count` bits of the
/// seed starting at `bit_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeGroup {
    bit_start: u8,
    bit_count: u8,
    max_probability: u32,
    alternatives: Vec<Alternative>,
}

impl AlternativeGroup {
    /// Build a group, taking `max_probability` as the sum of the weights.
    pub fn new(
        bit_start: u8,
        bit_count: u8,
        alternatives: Vec<Alternative>,
    ) -> Result<Self, ContentError> {
        if u32::from(bit_start) + u32::from(bit_count) > 32 {
            return Err(ContentError::InvalidBitRange {
                bit_start,
                bit_count,
            });
        }
        if alternatives.len() > MAX_ALTERNATIVES {
            return Err(ContentError::TooManyAlternatives {
                count: alternatives.len(),
                max: MAX_ALTERNATIVES,
            });
        }
        if let Some(bad) = alternatives.iter().find(|a| a.weight > MAX_WEIGHT) {
            return Err(ContentError::WeightOutOfRange { weight: bad.weight });
        }
        let max_probability = alternatives.iter().map(|a| u32::from(a.weight)).sum();
        Ok(Self {
            bit_start,
            bit_count,
            max_probability,
            alternatives,
        })
    }

    pub fn bit_start(&self) -> u8 {
        self.bit_start
    }

    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    pub fn max_probability(&self) -> u32 {
        self.max_probability
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// The value `r` this group compares against for a given seed.
    pub fn draw(&self, seed: u32) -> u32 {
        let bits = u64::from(extract_bits(seed, self.bit_start, self.bit_count));
        ((bits * u64::from(self.max_probability)) >> self.bit_count) as u32
    }

    /// Pick the first alternative for which `max_probability` minus the
    /// running weight total drops to `r` or below.
    pub fn select(&self, r: u32) -> Option<&Alternative> {
        let mut remaining = self.max_probability;
        self.alternatives.iter().find(|alt| {
            remaining = remaining.saturating_sub(u32::from(alt.weight));
            remaining <= r
        })
    }

    /// Entry slots referenced by this group's alternatives.
    pub fn references(&self) -> impl Iterator<Item = u8> + '_ {
        self.alternatives.iter().filter_map(|a| match a.payload {
            Payload::Reference(slot) => Some(slot),
            Payload::Literal(_) => None,
        })
    }
}

/// One grammar rule: groups are expanded in order and each contributes output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarEntry {
    pub groups: Vec<AlternativeGroup>,
}

impl GrammarEntry {
    pub fn new(groups: Vec<AlternativeGroup>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A user-visible town-name style rooted at one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub name: String,
    pub root: u8,
}
