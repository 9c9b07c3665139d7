//! Sentiment label -> display style. Total over any input string.

/// Emoji used whenever a mood cannot be determined.
pub const FALLBACK_EMOJI: &str = "🤔";
/// Label shown for a contact whose city mood lookup failed.
pub const FALLBACK_MOOD: &str = "—";
/// Label for sentiment strings outside the known categories.
pub const UNKNOWN_LABEL: &str = "Unknown";
/// Intensity used for neutral and unknown moods.
pub const NEUTRAL_INTENSITY: f64 = 0.5;

/// Text color class. Bright moods get dark text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    Happy,
    Sad,
    Angry,
    Fear,
    Excited,
    Calm,
    Tired,
    Surprised,
    Confident,
    Neutral,
    Unknown,
}

impl MoodCategory {
    /// Case-insensitive, whitespace-trimmed classification.
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "happy" | "joyful" | "positive" | "very positive" => Self::Happy,
            "sad" | "negative" | "very negative" => Self::Sad,
            "angry" => Self::Angry,
            "fear" => Self::Fear,
            "excited" => Self::Excited,
            "calm" => Self::Calm,
            "tired" => Self::Tired,
            "surprised" => Self::Surprised,
            "confident" => Self::Confident,
            "neutral" | "mixed" => Self::Neutral,
            _ => Self::Unknown,
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Fear => "Fear",
            Self::Excited => "Excited",
            Self::Calm => "Calm",
            Self::Tired => "Tired",
            Self::Surprised => "Surprised",
            Self::Confident => "Confident",
            Self::Neutral => "Neutral",
            Self::Unknown => UNKNOWN_LABEL,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😡",
            Self::Fear => "😱",
            Self::Excited => "😃",
            Self::Calm => "😌",
            Self::Tired => "😴",
            Self::Surprised => "😲",
            Self::Confident => "😎",
            Self::Neutral => "😐",
            Self::Unknown => FALLBACK_EMOJI,
        }
    }

    pub fn intensity(self) -> f64 {
        match self {
            Self::Happy => 0.8,
            Self::Sad => 0.7,
            Self::Angry => 0.9,
            Self::Fear => 0.8,
            Self::Excited => 0.9,
            Self::Calm => 0.4,
            Self::Tired => 0.3,
            Self::Surprised => 0.7,
            Self::Confident => 0.75,
            Self::Neutral | Self::Unknown => NEUTRAL_INTENSITY,
        }
    }

    pub fn tone(self) -> TextTone {
        match self {
            Self::Happy | Self::Excited | Self::Surprised => TextTone::Dark,
            _ => TextTone::Light,
        }
    }

    /// Card color family used by the UI layer.
    pub fn palette(self) -> &'static str {
        match self {
            Self::Happy | Self::Surprised => "yellow",
            Self::Sad => "blue",
            Self::Angry => "red",
            Self::Fear => "purple",
            Self::Excited => "pink",
            Self::Calm => "mint",
            Self::Confident => "indigo",
            Self::Tired | Self::Neutral | Self::Unknown => "gray",
        }
    }
}

/// Resolved display style for one sentiment label.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStyle {
    pub category: MoodCategory,
    pub emoji: &'static str,
    pub label: &'static str,
    pub intensity: f64,
    pub tone: TextTone,
    pub palette: &'static str,
}

impl MoodStyle {
    pub fn for_label(label: &str) -> Self {
        let category = MoodCategory::classify(label);
        Self {
            category,
            emoji: category.emoji(),
            label: category.display_label(),
            intensity: category.intensity().clamp(0.0, 1.0),
            tone: category.tone(),
            palette: category.palette(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_case_insensitive() {
        let style = MoodStyle::for_label("  HaPPy ");
        assert_eq!(style.emoji, "😊");
        assert_eq!(style.label, "Happy");
        assert_eq!(style.tone, TextTone::Dark);

        assert_eq!(MoodStyle::for_label("very negative").label, "Sad");
        assert_eq!(MoodStyle::for_label("Mixed").emoji, "😐");
    }

    #[test]
    fn test_unknown_label_fallback() {
        for raw in ["", "bewildered", "123", "happy-ish"] {
            let style = MoodStyle::for_label(raw);
            assert_eq!(style.category, MoodCategory::Unknown);
            assert_eq!(style.emoji, FALLBACK_EMOJI);
            assert_eq!(style.label, UNKNOWN_LABEL);
            assert_eq!(style.intensity, NEUTRAL_INTENSITY);
            assert_eq!(style.tone, TextTone::Light);
        }
    }

    #[test]
    fn test_intensity_in_unit_range() {
        let labels = [
            "happy", "sad", "angry", "fear", "excited", "calm", "tired", "surprised",
            "confident", "neutral", "nope",
        ];
        for label in labels {
            let i = MoodStyle::for_label(label).intensity;
            assert!((0.0..=1.0).contains(&i), "{label} -> {i}");
        }
    }
}
