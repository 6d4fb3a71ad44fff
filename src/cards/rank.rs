/// Card rank, discriminated by its comparison value.
///
/// Aces play high: `Ace = 14`, pips keep their face value.
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, serde::Serialize, serde::Deserialize,
)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// Ranks in deck order: ace first, then pips, then faces.
    pub const fn all() -> [Self; 13] {
        [
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
        ]
    }
    /// Comparison value in `2..=14`.
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

/// u8 isomorphism over comparison values
impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|r| r.value() == n)
            .ok_or_else(|| anyhow::anyhow!("invalid rank value {}", n))
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.value()
    }
}

/// str isomorphism; accepts both "10" and "T"
impl TryFrom<&str> for Rank {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::Ace),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" | "T" => Ok(Self::Ten),
            "J" => Ok(Self::Jack),
            "Q" => Ok(Self::Queen),
            "K" => Ok(Self::King),
            _ => Err(anyhow::anyhow!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ace_plays_high() {
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Two.value(), 2);
        assert!(Rank::Ace > Rank::King);
    }

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert_eq!(rank, Rank::try_from(u8::from(rank)).unwrap());
        }
        assert!(Rank::try_from(1u8).is_err());
        assert!(Rank::try_from(15u8).is_err());
    }

    #[test]
    fn bijective_str() {
        for rank in Rank::all() {
            assert_eq!(rank, Rank::try_from(rank.to_string().as_str()).unwrap());
        }
        assert_eq!(Rank::try_from("T").unwrap(), Rank::Ten);
        assert!(Rank::try_from("1").is_err());
    }
}
