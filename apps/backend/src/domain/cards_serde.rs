//! Serialization and deserialization for card types.
//!
//! Ranks and suits travel as their upper-case names (`"ACE"`, `"SPADES"`);
//! a card is the object `{"rank": .., "suit": ..}`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Rank, Suit};

impl Suit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }
}

impl Rank {
    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }
}

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}

impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rank::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid rank: {s}")))
    }
}
