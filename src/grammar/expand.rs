use super::{GrammarRegistry, GrammarSource, MAX_ENTRIES, NameBuffer, Payload};
use crate::error::LookupError;

/// Hard ceiling on the reference depth. An acyclic grammar never nests deeper
/// than its slot count, so any configured depth above this is clamped.
pub const MAX_RECURSION_DEPTH: u32 = MAX_ENTRIES as u32;

/// `bit_count` bits of `seed` starting at `bit_start`.
pub fn extract_bits(seed: u32, bit_start: u8, bit_count: u8) -> u32 {
    let shifted = seed.checked_shr(u32::from(bit_start)).unwrap_or(0);
    let mask = 1u32.checked_shl(u32::from(bit_count)).map_or(u32::MAX, |m| m - 1);
    shifted & mask
}

/// Render `style` of grammar source `source_id` for `seed`.
///
/// Output is identical for identical inputs and grammar content. `capacity`
/// bounds the result in bytes; longer names are truncated. A reference
/// chain deeper than `max_depth` (at most [`MAX_RECURSION_DEPTH`]) is an
/// error and yields no name.
pub fn expand(
    registry: &GrammarRegistry,
    source_id: u32,
    style: u16,
    seed: u32,
    capacity: Option<usize>,
    max_depth: u32,
) -> Result<String, LookupError> {
    let source = registry
        .get(source_id)
        .ok_or(LookupError::UnknownSource(source_id))?;
    let root = source
        .style(style)
        .ok_or(LookupError::UnknownStyle { source_id, style })?
        .root;

    let mut out = NameBuffer::new(capacity);
    let expander = Expander {
        source,
        seed,
        max_depth: max_depth.min(MAX_RECURSION_DEPTH),
    };
    expander.expand_entry(root, 0, &mut out)?;
    Ok(out.into_string())
}

struct Expander<'a> {
    source: &'a GrammarSource,
    seed: u32,
    max_depth: u32,
}

impl Expander<'_> {
    fn expand_entry(&self, slot: u8, depth: u32, out: &mut NameBuffer) -> Result<(), LookupError> {
        let source_id = self.source.source_id();
        if depth > self.max_depth {
            return Err(LookupError::RecursionLimit {
                source_id,
                depth: self.max_depth,
            });
        }
        let entry = self
            .source
            .entry(slot)
            .ok_or(LookupError::MissingEntry { source_id, slot })?;

        for group in &entry.groups {
            let r = group.draw(self.seed);
            let Some(alt) = group.select(r) else {
                continue;
            };
            match &alt.payload {
                Payload::Literal(text) => out.push_str(text),
                Payload::Reference(target) => self.expand_entry(*target, depth + 1, out)?,
            }
        }
        Ok(())
    }
}
