use serde::{Deserialize, Serialize};

use crate::choice::closed_enum;

closed_enum! {
    pub enum Mood ("mood") {
        Great => "great",
        Good => "good",
        Okay => "okay",
        Low => "low",
        Stressed => "stressed",
        Anxious => "anxious",
        Sad => "sad",
        Angry => "angry",
        Tired => "tired",
    }
}

impl Mood {
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Great | Self::Good)
    }

    /// Moods counted against the trend. `low` and `tired` count neither way.
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Sad | Self::Angry | Self::Stressed | Self::Anxious)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(default)]
    pub notes: String,
    pub timestamp: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry: String,
    pub timestamp: String,
    pub date: String,
    #[serde(default)]
    pub word_count: usize,
}

/// Direction of a set of mood entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Mixed,
}

impl Trend {
    pub fn of<'a>(moods: impl IntoIterator<Item = &'a Mood>) -> Self {
        let (mut up, mut down) = (0usize, 0usize);
        for m in moods {
            if m.is_positive() {
                up += 1;
            } else if m.is_negative() {
                down += 1;
            }
        }
        match up.cmp(&down) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Mixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend() {
        assert_eq!(Trend::of(&[Mood::Great, Mood::Sad, Mood::Good]), Trend::Positive);
        assert_eq!(Trend::of(&[Mood::Anxious, Mood::Tired]), Trend::Negative);
        assert_eq!(Trend::of(&[Mood::Low, Mood::Okay]), Trend::Mixed);
    }

    #[test]
    fn test_mood_rejects_unknown() {
        let err = "meh".parse::<Mood>().unwrap_err();
        assert!(err.to_string().starts_with("Invalid mood 'meh'"));
    }
}
