pub mod builtin;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod grammar;
pub mod townname;

#[cfg(test)]
mod testutil;

pub use builtin::{BUILTIN_SOURCE_ID, BUILTIN_STYLE_COUNT, BuiltinStyle, DEFAULT_BUILTIN_STYLE};
pub use catalog::{CatalogEntry, StyleCatalog};
pub use config::TownNameConfig;
pub use content::load_source_json;
pub use error::{ContentError, LookupError};
pub use grammar::{
    Alternative, AlternativeGroup, GrammarEntry, GrammarRegistry, GrammarSource, NameBuffer,
    MAX_RECURSION_DEPTH, Payload, Style, expand,
};
pub use townname::{TownNameParams, generate_town_name, town_name, verify_town_name};
