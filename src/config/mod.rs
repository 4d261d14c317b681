use serde::{Deserialize, Serialize};

pub const COLOR_ENV: &str = "CHANGE_COLLECTION_COLOR";

/// Rendering options for change matcher diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default)]
    pub colored: bool,
    #[serde(default = "default_dump_snapshots")]
    pub dump_snapshots: bool,
    #[serde(default)]
    pub pretty: bool,
}

fn default_dump_snapshots() -> bool {
    true
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            colored: false,
            dump_snapshots: default_dump_snapshots(),
            pretty: false,
        }
    }
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `CHANGE_COLLECTION_COLOR` (`1`/`true` or `0`/`false`); `NO_COLOR` wins.
    pub fn from_env() -> Self {
        let color = std::env::var(COLOR_ENV).ok();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::default().with_colored(!no_color && color.as_deref().is_some_and(parse_flag))
    }

    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn with_dump_snapshots(mut self, dump: bool) -> Self {
        self.dump_snapshots = dump;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "always")
}
