//! Sampling temperature presets ("Deterministic vs Diverse")

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperature {
    #[default]
    Deterministic,
    Accurate,
    Balanced,
    Creative,
    Diverse,
}

impl Temperature {
    pub const ALL: [Temperature; 5] = [
        Temperature::Deterministic,
        Temperature::Accurate,
        Temperature::Balanced,
        Temperature::Creative,
        Temperature::Diverse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Deterministic => "Deterministic",
            Self::Accurate => "Accurate",
            Self::Balanced => "Balanced",
            Self::Creative => "Creative",
            Self::Diverse => "Diverse",
        }
    }

    /// Sampling temperature sent with the completion request
    pub fn value(self) -> f32 {
        match self {
            Self::Deterministic => 0.0,
            Self::Accurate => 0.3,
            Self::Balanced => 0.5,
            Self::Creative => 0.7,
            Self::Diverse => 1.0,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_values() {
        let pairs: Vec<_> = Temperature::ALL
            .iter()
            .map(|t| (t.label(), t.value()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Deterministic", 0.0),
                ("Accurate", 0.3),
                ("Balanced", 0.5),
                ("Creative", 0.7),
                ("Diverse", 1.0),
            ]
        );
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        for t in Temperature::ALL {
            assert!((0.0..=1.0).contains(&t.value()), "{:?}", t);
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Temperature::Diverse.next(), Temperature::Deterministic);
        assert_eq!(Temperature::Deterministic.prev(), Temperature::Diverse);
    }
}
