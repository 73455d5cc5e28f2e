use thiserror::Error;

/// A grammar definition that cannot be accepted. The loader rejects the
/// whole source when it sees one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("entry slot {slot} is out of range (max {max})")]
    SlotOutOfRange { slot: u32, max: usize },

    #[error("grammar source {source_id:08X} already defines {max} styles")]
    TooManyStyles { source_id: u32, max: usize },

    #[error("bit range {bit_start}+{bit_count} does not fit in a 32-bit seed")]
    InvalidBitRange { bit_start: u8, bit_count: u8 },

    #[error("alternative weight {weight} does not fit in 7 bits")]
    WeightOutOfRange { weight: u8 },

    #[error("group has {count} alternatives (max {max})")]
    TooManyAlternatives { count: usize, max: usize },

    #[error("entry {from} references undefined entry {target}")]
    DanglingReference { from: u8, target: u8 },

    #[error("style {style} roots at undefined entry {root}")]
    UndefinedRoot { style: u16, root: u8 },

    #[error("source id 0 is reserved for the built-in generators")]
    ReservedSourceId,

    #[error("malformed grammar definition: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Malformed(err.to_string())
    }
}

/// A failed lookup while rendering a name. Callers substitute a fallback name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no grammar source registered for {0:08X}")]
    UnknownSource(u32),

    #[error("grammar source {source_id:08X} has no style {style}")]
    UnknownStyle { source_id: u32, style: u16 },

    #[error("grammar source {source_id:08X} has no entry in slot {slot}")]
    MissingEntry { source_id: u32, slot: u8 },

    #[error("grammar source {source_id:08X} exceeded recursion depth {depth}")]
    RecursionLimit { source_id: u32, depth: u32 },
}
