use crate::Seat;

/// What an accepted action did to the hand.
///
/// `winner` is set only when every opponent folded. A hand that reaches
/// showdown with several players ends with no winner; the caller names one
/// through [`Game::settle`](super::Game::settle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Outcome {
    pub phase_advanced: bool,
    pub hand_ended: bool,
    pub winner: Option<Seat>,
}

impl Outcome {
    /// Betting continues in the same phase.
    pub fn pending() -> Self {
        Self::default()
    }
    /// The phase closed and the next one opened.
    pub fn advanced() -> Self {
        Self {
            phase_advanced: true,
            ..Self::default()
        }
    }
    /// Everyone else folded.
    pub fn uncontested(seat: Seat) -> Self {
        Self {
            phase_advanced: false,
            hand_ended: true,
            winner: Some(seat),
        }
    }
    /// The river closed with several players left.
    pub fn showdown() -> Self {
        Self {
            phase_advanced: true,
            hand_ended: true,
            winner: None,
        }
    }
    pub fn is_showdown(&self) -> bool {
        self.hand_ended && self.winner.is_none()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.hand_ended, self.winner, self.phase_advanced) {
            (true, Some(seat), _) => write!(f, "seat {} wins uncontested", seat),
            (true, None, _) => write!(f, "showdown"),
            (false, _, true) => write!(f, "next phase"),
            (false, _, false) => write!(f, "next player"),
        }
    }
}
