use serde::{Deserialize, Serialize};

/// Confidence reported when the Sentiment Analyzer failed outright and the
/// fallback value is substituted. Zero means "no signal at all", which is
/// distinct from the midpoint default used when the model answers without a
/// confidence score.
const FALLBACK_CONFIDENCE: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }

    /// Parses a model-reported tone label. Anything outside the three
    /// recognized labels is treated as unknown.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Tone::Positive),
            "negative" => Some(Tone::Negative),
            "neutral" => Some(Tone::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub tone: Tone,
    pub confidence: f64,
}

impl Sentiment {
    pub fn new(tone: Tone, confidence: f64) -> Self {
        Self {
            tone,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Substitute value when the Sentiment Analyzer fails.
    pub fn fallback() -> Self {
        Self {
            tone: Tone::Neutral,
            confidence: FALLBACK_CONFIDENCE,
        }
    }
}
