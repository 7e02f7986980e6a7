use core::fmt;
use std::fmt::Display;

use thiserror::Error;

/// Errors from parsing a two character card code like `"Ks"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card code must be exactly two characters, got {0:?}")]
    InvalidLength(String),

    #[error("unknown card value character: {0:?}")]
    UnknownValue(char),

    #[error("unknown suit character: {0:?}")]
    UnknownSuit(char),
}

/// Card values, two through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// Parse a value from its single character code.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '2' => Some(Value::Two),
            '3' => Some(Value::Three),
            '4' => Some(Value::Four),
            '5' => Some(Value::Five),
            '6' => Some(Value::Six),
            '7' => Some(Value::Seven),
            '8' => Some(Value::Eight),
            '9' => Some(Value::Nine),
            'T' => Some(Value::Ten),
            'J' => Some(Value::Jack),
            'Q' => Some(Value::Queen),
            'K' => Some(Value::King),
            'A' => Some(Value::Ace),
            _ => None,
        }
    }

    /// The single character code for this value.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

/// The four suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    /// Parse a suit from its single character code.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'c' => Some(Suit::Club),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            _ => None,
        }
    }

    /// The single character code for this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }
}

/// A single playing card.
///
/// The replay engine only ever cares about card identity. There is no
/// ranking or hand strength logic anywhere in this crate.
///
/// # Example
///
/// ```
/// use holdem_replay::core::{Card, Suit, Value};
///
/// let card = Card::try_from("Ks").unwrap();
/// assert_eq!(card, Card::new(Value::King, Suit::Spade));
/// assert_eq!(card.to_string(), "Ks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The face value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let (value_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(su), None) => (v, su),
            _ => return Err(CardParseError::InvalidLength(s.to_string())),
        };

        let value = Value::from_char(value_char).ok_or(CardParseError::UnknownValue(value_char))?;
        let suit = Suit::from_char(suit_char).ok_or(CardParseError::UnknownSuit(suit_char))?;

        Ok(Card::new(value, suit))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        for code in ["As", "Kh", "Td", "2c", "9s", "Qd"] {
            let card = Card::try_from(code).unwrap();
            assert_eq!(card.to_string(), code);
        }
    }

    #[test]
    fn test_parse_is_case_tolerant() {
        assert_eq!(
            Card::try_from("kS").unwrap(),
            Card::new(Value::King, Suit::Spade)
        );
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            Card::try_from("K").unwrap_err(),
            CardParseError::InvalidLength("K".to_string())
        );
        assert_eq!(
            Card::try_from("Ksx").unwrap_err(),
            CardParseError::InvalidLength("Ksx".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_unknown_chars() {
        assert_eq!(
            Card::try_from("1s").unwrap_err(),
            CardParseError::UnknownValue('1')
        );
        assert_eq!(
            Card::try_from("Kx").unwrap_err(),
            CardParseError::UnknownSuit('x')
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let card = Card::new(Value::Seven, Suit::Diamond);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"7d\"");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
