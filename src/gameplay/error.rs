use super::phase::Phase;
use crate::Chips;
use crate::Seat;

/// Reasons the engine rejects a request.
///
/// None of these leave a [`Game`](super::Game) half-updated: every check runs
/// before any chip moves, so a rejected request is a no-op on state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BettingError {
    #[error("not your turn: seat {seat} acted while {expected:?} is to act")]
    NotYourTurn { seat: Seat, expected: Option<Seat> },
    #[error("seat {0} has folded or is not active")]
    InactivePlayer(Seat),
    #[error("seat {seat} cannot check while owing {owed}")]
    InvalidCheck { seat: Seat, owed: Chips },
    #[error("seat {seat} needs {needed} chips but holds {stack}")]
    InsufficientStack { seat: Seat, needed: Chips, stack: Chips },
    #[error("raise to {amount} is below the minimum raise to {minimum}")]
    RaiseTooSmall { amount: Chips, minimum: Chips },
    #[error("deck holds {remaining} cards but {needed} are needed")]
    InsufficientCards { needed: usize, remaining: usize },

    #[error("{found} active players, at least {minimum} needed")]
    NotEnoughPlayers { found: usize, minimum: usize },
    #[error("{found} active players, at most {maximum} allowed")]
    TooManyPlayers { found: usize, maximum: usize },
    #[error("seat {0} is taken twice")]
    DuplicateSeat(Seat),
    #[error("seat {0} is not a valid seat number")]
    InvalidSeat(Seat),
    #[error("operation not allowed during {0}")]
    OutOfPhase(Phase),
    #[error("cards for this hand were already dealt")]
    AlreadyDealt,

    #[error("the hand is still being played")]
    NotOver,
    #[error("seat {0} is not contesting the pot")]
    UnknownWinner(Seat),
    #[error("a contested pot needs at least one named winner")]
    NoWinners,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_seat() {
        let e = BettingError::InvalidCheck { seat: 2, owed: 10 };
        assert_eq!(e.to_string(), "seat 2 cannot check while owing 10");
        let e = BettingError::NotYourTurn {
            seat: 1,
            expected: Some(2),
        };
        assert!(e.to_string().contains("Some(2)"));
    }

    #[test]
    fn converts_into_anyhow() {
        fn reject() -> anyhow::Result<()> {
            let rejected: Result<(), BettingError> = Err(BettingError::InactivePlayer(3));
            rejected?;
            Ok(())
        }
        let e = reject().unwrap_err();
        assert_eq!(
            e.downcast_ref::<BettingError>(),
            Some(&BettingError::InactivePlayer(3))
        );
    }
}
