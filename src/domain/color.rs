// src/domain/color.rs
//
// Colors and color identities
//
// A color identity is a set over the five colors. Its canonical code lists the
// symbols in WUBRG order; the empty set is written "C" (colorless).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{DomainError, DomainResult};

/// One of the five mana colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in canonical WUBRG order
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Color> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Color::White => 1 << 0,
            Color::Blue => 1 << 1,
            Color::Black => 1 << 2,
            Color::Red => 1 << 3,
            Color::Green => 1 << 4,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        let mut chars = symbol.trim().chars();
        let color = match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_symbol(c),
            _ => None,
        };
        color.ok_or_else(|| serde::de::Error::custom(format!("Unknown color symbol: {:?}", symbol)))
    }
}

/// A set of colors. Empty means colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorIdentity(u8);

impl ColorIdentity {
    pub const COLORLESS_CODE: &'static str = "C";

    pub fn colorless() -> Self {
        Self(0)
    }

    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        Self(colors.into_iter().fold(0, |acc, c| acc | c.bit()))
    }

    /// Parse a deck color-identity code such as "UR", "ru" or "C".
    ///
    /// Letters may come in any order. Unknown or repeated letters are
    /// rejected, as is "C" combined with colors.
    pub fn parse_code(code: &str) -> DomainResult<Self> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidColorIdentity(code.to_string()));
        }
        if trimmed.eq_ignore_ascii_case(Self::COLORLESS_CODE) {
            return Ok(Self::colorless());
        }

        let mut bits = 0u8;
        for symbol in trimmed.chars() {
            let color = Color::from_symbol(symbol)
                .ok_or_else(|| DomainError::InvalidColorIdentity(code.to_string()))?;
            if bits & color.bit() != 0 {
                return Err(DomainError::InvalidColorIdentity(code.to_string()));
            }
            bits |= color.bit();
        }
        Ok(Self(bits))
    }

    /// Parse a list of symbols as delivered by the card database
    /// (e.g. `["R", "G"]`). Unknown symbols are rejected.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> DomainResult<Self> {
        let mut bits = 0u8;
        for symbol in symbols {
            let s = symbol.as_ref().trim();
            if s.is_empty() {
                continue;
            }
            let mut chars = s.chars();
            let color = match (chars.next(), chars.next()) {
                (Some(c), None) => Color::from_symbol(c),
                _ => None,
            }
            .ok_or_else(|| DomainError::InvalidColorIdentity(s.to_string()))?;
            bits |= color.bit();
        }
        Ok(Self(bits))
    }

    /// Parse the comma-separated storage form ("R,G", "" for colorless)
    pub fn from_symbol_list(list: &str) -> DomainResult<Self> {
        let parts: Vec<&str> = list.split(',').collect();
        Self::from_symbols(&parts)
    }

    pub fn is_colorless(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    pub fn is_subset_of(self, other: ColorIdentity) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.is_colorless()
    }

    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Canonical deck code: WUBRG order, "C" when colorless
    pub fn code(self) -> String {
        if self.is_colorless() {
            return Self::COLORLESS_CODE.to_string();
        }
        self.colors().map(Color::symbol).collect()
    }

    /// Comma-separated symbols, empty string when colorless
    pub fn symbol_list(self) -> String {
        self.colors()
            .map(|c| c.symbol().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ColorIdentity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_code(s)
    }
}

impl Serialize for ColorIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for ColorIdentity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse_code(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Color::Blue).unwrap(), "\"U\"");
        let parsed: Vec<Color> = serde_json::from_str(r#"["R", "g"]"#).unwrap();
        assert_eq!(parsed, vec![Color::Red, Color::Green]);
        assert!(serde_json::from_str::<Color>(r#""P""#).is_err());
    }

    #[test]
    fn test_parse_code_canonicalizes_order() {
        let identity = ColorIdentity::parse_code("RU").unwrap();
        assert_eq!(identity.code(), "UR");
        assert_eq!(ColorIdentity::parse_code("gbrwu").unwrap().code(), "WUBRG");
    }

    #[test]
    fn test_colorless_code() {
        let identity = ColorIdentity::parse_code("C").unwrap();
        assert!(identity.is_colorless());
        assert_eq!(identity.code(), "C");
        assert_eq!(identity.symbol_list(), "");
    }

    #[test]
    fn test_invalid_codes_rejected() {
        assert!(ColorIdentity::parse_code("").is_err());
        assert!(ColorIdentity::parse_code("X").is_err());
        assert!(ColorIdentity::parse_code("UU").is_err());
        assert!(ColorIdentity::parse_code("CU").is_err());
    }

    #[test]
    fn test_subset() {
        let red = ColorIdentity::from_colors([Color::Red]);
        let gruul = ColorIdentity::parse_code("RG").unwrap();
        let green = ColorIdentity::parse_code("G").unwrap();

        assert!(red.is_subset_of(gruul));
        assert!(!red.is_subset_of(green));
        assert!(ColorIdentity::colorless().is_subset_of(ColorIdentity::colorless()));
    }

    #[test]
    fn test_symbol_list_round_trip() {
        let identity = ColorIdentity::from_symbol_list("G,R").unwrap();
        assert_eq!(identity.symbol_list(), "R,G");
        assert!(ColorIdentity::from_symbol_list("").unwrap().is_colorless());
        assert!(ColorIdentity::from_symbols(&["R", "Q"]).is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let identity = ColorIdentity::parse_code("BG").unwrap();
        assert_eq!(serde_json::to_string(&identity).unwrap(), "\"BG\"");
        let parsed: ColorIdentity = serde_json::from_str("\"GB\"").unwrap();
        assert_eq!(parsed, identity);
    }
}
