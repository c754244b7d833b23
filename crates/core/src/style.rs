//! Style tags — the dress register an occasion asks for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Formal,
    Elegant,
    Casual,
    Athletic,
    Comfortable,
    Relaxed,
    Sophisticated,
    Versatile,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Formal,
        Style::Elegant,
        Style::Casual,
        Style::Athletic,
        Style::Comfortable,
        Style::Relaxed,
        Style::Sophisticated,
        Style::Versatile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Formal => "formal",
            Style::Elegant => "elegant",
            Style::Casual => "casual",
            Style::Athletic => "athletic",
            Style::Comfortable => "comfortable",
            Style::Relaxed => "relaxed",
            Style::Sophisticated => "sophisticated",
            Style::Versatile => "versatile",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == lower)
            .ok_or_else(|| format!("unknown style '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_style() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), style);
        }
        assert!("grunge".parse::<Style>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Style::Sophisticated).unwrap();
        assert_eq!(json, "\"sophisticated\"");
    }
}
