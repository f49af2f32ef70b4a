use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::core::{CarouselMode, DEFAULT_ITEM_MARGIN_PX};
use crate::error::{CarouselError, CarouselResult};
use crate::interaction::DEFAULT_RESIZE_QUIET_PERIOD_MS;

/// One item as supplied by the host: opaque content plus pass-through
/// attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItemConfig {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub html_attributes: IndexMap<String, String>,
}

impl CarouselItemConfig {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            html_attributes: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html_attributes.insert(name.into(), value.into());
        self
    }
}

/// Public carousel bootstrap configuration.
///
/// This type is serializable so host applications can persist/load carousel
/// setup without inventing their own ad-hoc format. Malformed values never
/// fail deserialization; they fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    #[serde(default)]
    pub items: Vec<CarouselItemConfig>,
    #[serde(default, deserialize_with = "deserialize_lenient_index")]
    pub index: usize,
    #[serde(default, rename = "type")]
    pub mode: CarouselMode,
    #[serde(default)]
    pub aria_label_prev: Option<String>,
    #[serde(default)]
    pub aria_label_next: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub html_attributes: IndexMap<String, String>,
    #[serde(default = "default_item_margin_px")]
    pub item_margin_px: f64,
    #[serde(default = "default_resize_quiet_period_ms")]
    pub resize_quiet_period_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
            mode: CarouselMode::default(),
            aria_label_prev: None,
            aria_label_next: None,
            class: None,
            html_attributes: IndexMap::new(),
            item_margin_px: default_item_margin_px(),
            resize_quiet_period_ms: default_resize_quiet_period_ms(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn new(items: Vec<CarouselItemConfig>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Sets the initial leading item.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: CarouselMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_aria_labels(
        mut self,
        prev: impl Into<String>,
        next: impl Into<String>,
    ) -> Self {
        self.aria_label_prev = Some(prev.into());
        self.aria_label_next = Some(next.into());
        self
    }

    /// Sets the caller CSS class appended after the built-in classes.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_html_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html_attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_item_margin_px(mut self, margin: f64) -> Self {
        self.item_margin_px = margin;
        self
    }

    #[must_use]
    pub fn with_resize_quiet_period_ms(mut self, quiet_period_ms: u64) -> Self {
        self.resize_quiet_period_ms = quiet_period_ms;
        self
    }

    /// Replaces values the engine cannot work with by their defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !self.item_margin_px.is_finite() || self.item_margin_px < 0.0 {
            warn!(
                item_margin_px = self.item_margin_px,
                "invalid item margin, falling back to default"
            );
            self.item_margin_px = default_item_margin_px();
        }
        if self
            .class
            .as_deref()
            .is_some_and(|class| class.trim().is_empty())
        {
            self.class = None;
        }
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CarouselError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        serde_json::from_str::<Self>(input)
            .map(Self::normalized)
            .map_err(|e| CarouselError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_item_margin_px() -> f64 {
    DEFAULT_ITEM_MARGIN_PX
}

fn default_resize_quiet_period_ms() -> u64 {
    DEFAULT_RESIZE_QUIET_PERIOD_MS
}

/// Integer coercion in the spirit of a lenient `parseInt`: numbers truncate,
/// strings read their leading signed digits, everything else is `0`.
/// Negative results clamp to `0`.
pub(crate) fn coerce_index(value: &serde_json::Value) -> usize {
    let parsed = match value {
        serde_json::Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.is_finite())
                .map(|value| value.trunc() as i64)
        }),
        serde_json::Value::String(text) => parse_leading_int(text),
        _ => None,
    };

    parsed
        .and_then(|value| usize::try_from(value.max(0)).ok())
        .unwrap_or(0)
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn deserialize_lenient_index<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map_or(0, coerce_index))
}
