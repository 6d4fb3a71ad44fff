use crate::Chips;
use colored::*;

/// A betting decision.
///
/// `Raise` carries the new phase total the raiser is betting *to*, not the
/// increment. Calls and checks carry nothing; the engine knows what is owed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

impl Action {
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Self::Raise(_))
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut words = s.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty action"))?
            .to_lowercase();
        let action = match verb.as_str() {
            "fold" | "f" => Self::Fold,
            "check" | "x" => Self::Check,
            "call" | "c" => Self::Call,
            "raise" | "r" => Self::Raise(
                words
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("raise needs an amount"))?
                    .parse::<Chips>()?,
            ),
            _ => return Err(anyhow::anyhow!("invalid action: {}", s)),
        };
        match words.next() {
            None => Ok(action),
            Some(extra) => Err(anyhow::anyhow!("unexpected input after action: {}", extra)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "{}", "FOLD".red()),
            Self::Check => write!(f, "{}", "CHECK".cyan()),
            Self::Call => write!(f, "{}", "CALL".yellow()),
            Self::Raise(amount) => write!(f, "{}", format!("RAISE {}", amount).green()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words_and_shorthand() {
        assert_eq!(Action::try_from("fold").unwrap(), Action::Fold);
        assert_eq!(Action::try_from("X").unwrap(), Action::Check);
        assert_eq!(Action::try_from(" call ").unwrap(), Action::Call);
        assert_eq!(Action::try_from("raise 60").unwrap(), Action::Raise(60));
        assert_eq!(Action::try_from("r 100").unwrap(), Action::Raise(100));
    }

    #[test]
    fn rejects_malformed() {
        assert!(Action::try_from("").is_err());
        assert!(Action::try_from("raise").is_err());
        assert!(Action::try_from("raise lots").is_err());
        assert!(Action::try_from("raise -5").is_err());
        assert!(Action::try_from("call 20").is_err());
        assert!(Action::try_from("shove").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Fold).unwrap(), r#""fold""#);
        assert_eq!(
            serde_json::to_string(&Action::Raise(60)).unwrap(),
            r#"{"raise":60}"#
        );
    }
}
