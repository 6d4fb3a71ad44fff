use super::rank::Rank;
use super::suit::Color;
use super::suit::Suit;
use colored::Colorize;

/// A single playing card. Immutable and compared by value.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Comparison value, ace high.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a fresh deck 0-51
/// suit-major, aces first within a suit
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        let r = Rank::all()
            .iter()
            .position(|r| *r == c.rank)
            .expect("every rank is listed") as u8;
        c.suit as u8 * 13 + r
    }
}
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        anyhow::ensure!(n < 52, "card index {} out of range", n);
        let suit = Suit::all()[(n / 13) as usize];
        let rank = Rank::all()[(n % 13) as usize];
        Ok(Self::from((rank, suit)))
    }
}

/// str isomorphism
/// rank then suit, suit as symbol or letter: "A♠", "As", "10h", "Th"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let suit = s
            .chars()
            .last()
            .ok_or_else(|| anyhow::anyhow!("empty card string"))?;
        let rank = &s[..s.len() - suit.len_utf8()];
        Ok(Self::from((Rank::try_from(rank)?, Suit::try_from(suit)?)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = format!("{}{}", self.rank, self.suit);
        match self.color() {
            Color::Red => write!(f, "{}", text.red()),
            Color::Black => write!(f, "{}", text),
        }
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self::try_from(rand::random_range(0..52u8)).expect("index in range")
    }
}
