use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Paging strategy, fixed for the lifetime of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselMode {
    /// Next/prev step exactly one item.
    Discrete,
    /// Next/prev step by as many whole items as fit in the viewport.
    #[default]
    Continuous,
}

impl CarouselMode {
    /// Parses a mode token, falling back to `Continuous` for anything unknown.
    #[must_use]
    pub fn from_token_lenient(token: &str) -> Self {
        match token.trim() {
            "discrete" => Self::Discrete,
            _ => Self::Continuous,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Continuous => "continuous",
        }
    }

    /// Value `stop` has to reach for the next control to be disabled.
    #[must_use]
    pub fn next_stop_target(self, total_items: usize) -> usize {
        match self {
            Self::Continuous => total_items,
            Self::Discrete => total_items.saturating_sub(1),
        }
    }
}

impl fmt::Display for CarouselMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CarouselMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(token)) => Self::from_token_lenient(&token),
            _ => Self::Continuous,
        })
    }
}

/// Walk direction used by the offset calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}
