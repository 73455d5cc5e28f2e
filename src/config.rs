use serde::Deserialize;

/// Configuration for town-name rendering and the unique-name search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TownNameConfig {
    /// Accepted names have strictly fewer characters than this.
    pub max_name_chars: usize,
    /// Number of seeds tried before giving up on a unique name.
    pub max_attempts: u32,
    /// Deepest reference chain the expander will follow, clamped to
    /// [`crate::grammar::MAX_RECURSION_DEPTH`].
    pub max_recursion_depth: u32,
    /// Optional byte capacity for rendered names. Longer output is truncated.
    pub name_capacity: Option<usize>,
}

impl Default for TownNameConfig {
    fn default() -> Self {
        Self {
            max_name_chars: 32,
            max_attempts: 1000,
            max_recursion_depth: 64,
            name_capacity: None,
        }
    }
}

impl TownNameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
