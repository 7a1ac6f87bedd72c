use std::fmt;

use serde::{Deserialize, Serialize};

/// How much of a document a summary keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Depth {
    /// Up to two sentences.
    Brief,
    /// Up to four sentences.
    #[default]
    Medium,
    /// Up to six sentences.
    Detailed,
}

impl Depth {
    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Brief => "brief",
            Depth::Medium => "medium",
            Depth::Detailed => "detailed",
        }
    }
}

/// Names match exactly; anything else, including other casings, falls back
/// to [`Depth::Medium`].
impl From<&str> for Depth {
    fn from(name: &str) -> Self {
        match name {
            "brief" => Depth::Brief,
            "detailed" => Depth::Detailed,
            _ => Depth::Medium,
        }
    }
}

impl From<String> for Depth {
    fn from(name: String) -> Self {
        Depth::from(name.as_str())
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
