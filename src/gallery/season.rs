//! Seasons and the calendar mapping onto them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A growing season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in selector order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    /// Season for a calendar month (1 = January).
    ///
    /// March–May is spring, June–August summer, September–November autumn,
    /// anything else winter.
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Selector label with its emoji.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring 🌸",
            Season::Summer => "Summer ☀️",
            Season::Autumn => "Autumn 🍂",
            Season::Winter => "Winter ❄️",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no season.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown season {0:?}")]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSeason(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_month() {
        let expected = [
            Season::Winter, // Jan
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter, // Dec
        ];
        for (i, season) in expected.iter().enumerate() {
            assert_eq!(Season::from_month(i as u32 + 1), *season, "month {}", i + 1);
        }
    }

    #[test]
    fn test_from_month_out_of_range_is_winter() {
        assert_eq!(Season::from_month(0), Season::Winter);
        assert_eq!(Season::from_month(13), Season::Winter);
    }

    #[test]
    fn test_parse() {
        assert_eq!("autumn".parse::<Season>(), Ok(Season::Autumn));
        assert_eq!(" Summer ".parse::<Season>(), Ok(Season::Summer));
        assert_eq!("Fall".parse::<Season>(), Err(UnknownSeason("Fall".into())));
    }

    #[test]
    fn test_label() {
        assert!(Season::Winter.label().starts_with("Winter"));
        assert_eq!(Season::Spring.to_string(), "Spring");
    }
}
