//! Tone choices offered by the form's dropdown

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Urgent,
    Emotional,
    Conversational,
    Persuasive,
    Positive,
    #[serde(rename = "Direct and witty")]
    DirectAndWitty,
    #[serde(rename = "Polite and indirect language")]
    PoliteAndIndirect,
    Sarcastic,
    Hopeful,
    Encouraging,
    Apologetic,
}

impl Tone {
    /// All tones in display order
    pub const ALL: [Tone; 13] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Urgent,
        Tone::Emotional,
        Tone::Conversational,
        Tone::Persuasive,
        Tone::Positive,
        Tone::DirectAndWitty,
        Tone::PoliteAndIndirect,
        Tone::Sarcastic,
        Tone::Hopeful,
        Tone::Encouraging,
        Tone::Apologetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Friendly => "Friendly",
            Self::Urgent => "Urgent",
            Self::Emotional => "Emotional",
            Self::Conversational => "Conversational",
            Self::Persuasive => "Persuasive",
            Self::Positive => "Positive",
            Self::DirectAndWitty => "Direct and witty",
            Self::PoliteAndIndirect => "Polite and indirect language",
            Self::Sarcastic => "Sarcastic",
            Self::Hopeful => "Hopeful",
            Self::Encouraging => "Encouraging",
            Self::Apologetic => "Apologetic",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next tone, wrapping around at the end of the list
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tone, wrapping around at the start of the list
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
