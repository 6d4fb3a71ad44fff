use super::card::Card;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(a, b)
    }
}

impl TryFrom<Vec<Card>> for Hole {
    type Error = anyhow::Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.as_slice() {
            [a, b] if a != b => Ok(Self(*a, *b)),
            _ => Err(anyhow::anyhow!("hole needs two distinct cards")),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_cards() {
        let hole = Hole::try_from("A♠ K♠").unwrap();
        assert_eq!(hole.cards()[0].value(), 14);
        assert_eq!(hole.cards()[1].value(), 13);
    }

    #[test]
    fn rejects_wrong_counts() {
        assert!(Hole::try_from("A♠").is_err());
        assert!(Hole::try_from("A♠ K♠ Q♠").is_err());
        assert!(Hole::try_from("A♠ A♠").is_err());
    }
}
