#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Suit {
    Heart = 0,
    Diamond = 1,
    Club = 2,
    Spade = 3,
}

/// Red or black, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// Suits in deck order.
    pub const fn all() -> [Self; 4] {
        [Self::Heart, Self::Diamond, Self::Club, Self::Spade]
    }
    pub const fn color(&self) -> Color {
        match self {
            Self::Heart | Self::Diamond => Color::Red,
            Self::Club | Self::Spade => Color::Black,
        }
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Heart => '♥',
            Self::Diamond => '♦',
            Self::Club => '♣',
            Self::Spade => '♠',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♥' | 'h' | 'H' => Ok(Self::Heart),
            '♦' | 'd' | 'D' => Ok(Self::Diamond),
            '♣' | 'c' | 'C' => Ok(Self::Club),
            '♠' | 's' | 'S' => Ok(Self::Spade),
            _ => Err(anyhow::anyhow!("invalid suit char: {}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
