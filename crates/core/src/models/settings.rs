use serde::{Deserialize, Serialize};

/// Default loss-aversion keywords: English protection-framed terms plus
/// their Russian equivalents from the legacy default keyword list.
pub const DEFAULT_LOSS_AVERSION_KEYWORDS: &[&str] = &[
    "insurance",
    "protection",
    "guarantee",
    "warranty",
    "backup",
    "страховка",
    "защита",
    "гарантия",
    "резервный",
];

/// User-configurable detector settings.
///
/// Numeric thresholds are fixed heuristics and live next to the rules;
/// only locale-dependent inputs are configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorSettings {
    /// Substrings that mark a purchase as protection-framed.
    /// Matched case-insensitively against the purchase name.
    pub loss_aversion_keywords: Vec<String>,
}

impl DetectorSettings {
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            loss_aversion_keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self::with_keywords(DEFAULT_LOSS_AVERSION_KEYWORDS.iter().copied())
    }
}
