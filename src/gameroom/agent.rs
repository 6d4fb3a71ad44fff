use crate::Seat;
use crate::gameplay::*;

/// Anything that can make betting decisions at a [`Room`](super::Room).
///
/// The room asks whichever agent holds the turn for an action and tells
/// every agent what was played. Agents see the full [`Game`]; hiding other
/// players' hole cards is up to the implementation.
pub trait Agent: Send {
    /// Choose an action for `seat`. Called only on that seat's turn.
    fn decide(&mut self, game: &Game, seat: Seat) -> Action;

    /// Observe an action the hand accepted, with what it did.
    /// Rejected actions are never reported.
    fn notify(&mut self, _seat: Seat, _action: Action, _outcome: &Outcome) {}
}
