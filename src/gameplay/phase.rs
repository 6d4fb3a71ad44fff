/// The six stages of a hand, in the only order they can occur.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Blinds = 0isize,
    Preflop = 1isize,
    Flop = 2isize,
    Turn = 3isize,
    River = 4isize,
    Showdown = 5isize,
}

impl Phase {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Blinds,
            Self::Preflop,
            Self::Flop,
            Self::Turn,
            Self::River,
            Self::Showdown,
        ]
    }
    /// The following phase; `None` once at showdown.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Blinds => Some(Self::Preflop),
            Self::Preflop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => Some(Self::Showdown),
            Self::Showdown => None,
        }
    }
    /// Community cards the table may see during this phase.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Blinds => 0,
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
            Self::Showdown => 5,
        }
    }
}

impl TryFrom<&str> for Phase {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "blinds" => Ok(Self::Blinds),
            "preflop" => Ok(Self::Preflop),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" => Ok(Self::River),
            "showdown" => Ok(Self::Showdown),
            _ => Err(anyhow::anyhow!("invalid phase: {}", s)),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Blinds => write!(f, "blinds"),
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
            Self::Showdown => write!(f, "showdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_linear() {
        let mut phase = Phase::Blinds;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            assert!(next > phase);
            phase = next;
            seen.push(phase);
        }
        assert_eq!(seen, Phase::all());
    }

    #[test]
    fn visibility_by_phase() {
        let counts = Phase::all().iter().map(Phase::n_observed).collect::<Vec<_>>();
        assert_eq!(counts, vec![0, 0, 3, 4, 5, 5]);
    }

    #[test]
    fn bijective_str() {
        for phase in Phase::all() {
            assert_eq!(*phase, Phase::try_from(phase.to_string().as_str()).unwrap());
        }
    }
}
