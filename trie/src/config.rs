use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::TRIE_LOG_TARGET;

pub const DEFAULT_SEPARATOR: &str = "-";

/// How a prefix that stops part way through a compacted edge is counted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMode {
    /// Every word below the edge matches, same as before compaction.
    #[default]
    Inclusive,
    /// Only prefixes ending exactly on a node match.
    NodeBoundary,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TrieConfig {
    /// Placed between node groups in sequence traces.
    pub separator: String,
    pub prefix_mode: PrefixMode,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            prefix_mode: PrefixMode::default(),
        }
    }
}

pub(crate) fn sanitize(conf: &TrieConfig) -> TrieConfig {
    let default = TrieConfig::default();
    let mut conf = conf.clone();
    if conf.separator.is_empty() {
        warn!(target: TRIE_LOG_TARGET, provided = ?conf.separator, updated = ?default.separator, "Sanitizing empty trie sequence separator");
        conf.separator = default.separator
    }
    conf
}
