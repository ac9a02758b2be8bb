//! Preset lifestyle expense levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference lifestyles with typical monthly spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifestyle {
    Basic,
    Moderate,
    Comfortable,
    Affluent,
}

impl Lifestyle {
    /// All presets, cheapest first
    pub const ALL: [Lifestyle; 4] = [
        Lifestyle::Basic,
        Lifestyle::Moderate,
        Lifestyle::Comfortable,
        Lifestyle::Affluent,
    ];

    /// Monthly expenses for this lifestyle
    pub fn monthly_expenses(self) -> f64 {
        match self {
            Lifestyle::Basic => 11_000.0,
            Lifestyle::Moderate => 15_000.0,
            Lifestyle::Comfortable => 27_000.0,
            Lifestyle::Affluent => 39_000.0,
        }
    }

    /// Card heading, e.g. "Basic Lifestyle"
    pub fn label(self) -> &'static str {
        match self {
            Lifestyle::Basic => "Basic Lifestyle",
            Lifestyle::Moderate => "Moderate Lifestyle",
            Lifestyle::Comfortable => "Comfortable Lifestyle",
            Lifestyle::Affluent => "Affluent Lifestyle",
        }
    }

    /// Look up a preset by its card heading
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|l| l.label() == label)
    }
}

impl fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Lifestyle {
    type Err = String;

    /// Accepts the short name ("basic") or the full heading ("Basic Lifestyle")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(l) = Self::from_label(s) {
            return Ok(l);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Lifestyle::Basic),
            "moderate" => Ok(Lifestyle::Moderate),
            "comfortable" => Ok(Lifestyle::Comfortable),
            "affluent" => Ok(Lifestyle::Affluent),
            other => Err(format!("Unknown lifestyle: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Lifestyle::from_label("Moderate Lifestyle"), Some(Lifestyle::Moderate));
        assert_eq!(Lifestyle::from_label("Luxury Lifestyle"), None);
    }

    #[test]
    fn test_parse_short_name() {
        assert_eq!("affluent".parse::<Lifestyle>(), Ok(Lifestyle::Affluent));
        assert_eq!("Basic Lifestyle".parse::<Lifestyle>(), Ok(Lifestyle::Basic));
        assert!("lavish".parse::<Lifestyle>().is_err());
    }

    #[test]
    fn test_presets_ascending() {
        let expenses: Vec<f64> = Lifestyle::ALL.iter().map(|l| l.monthly_expenses()).collect();
        assert!(expenses.windows(2).all(|w| w[0] < w[1]));
    }
}
