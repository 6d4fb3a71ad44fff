use crate::Chips;
use crate::Seat;
use crate::cards::Hole;

/// One seat's ledger for the hand in progress.
///
/// - `stack`: chips behind, not yet committed
/// - `current_bet`: chips committed in the current phase
/// - `total_bet`: chips committed across the whole hand
/// - `is_folded`: sticky for the rest of the hand
/// - `is_active`: seated and dealt in; inactive seats are ignored entirely
/// - `hand`: hole cards, once dealt
///
/// Chips only ever move from `stack` into the two bet counters, so
/// `stack + total_bet` is constant until the pot is awarded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    seat: Seat,
    stack: Chips,
    current_bet: Chips,
    total_bet: Chips,
    is_folded: bool,
    is_active: bool,
    hand: Option<Hole>,
}

impl From<(Seat, Chips)> for Player {
    fn from((seat, stack): (Seat, Chips)) -> Self {
        Self {
            seat,
            stack,
            current_bet: 0,
            total_bet: 0,
            is_folded: false,
            is_active: true,
            hand: None,
        }
    }
}

impl Player {
    pub fn new(seat: Seat, stack: Chips) -> Self {
        Self::from((seat, stack))
    }
    /// Same player, sitting out.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn total_bet(&self) -> Chips {
        self.total_bet
    }
    pub fn is_folded(&self) -> bool {
        self.is_folded
    }
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    pub fn hand(&self) -> Option<Hole> {
        self.hand
    }
    /// Still competing for the pot.
    pub fn is_live(&self) -> bool {
        self.is_active && !self.is_folded
    }
}

impl Player {
    /// Commits chips from stack to the pot.
    pub(super) fn bet(&mut self, chips: Chips) {
        debug_assert!(self.stack >= chips);
        self.stack -= chips;
        self.current_bet += chips;
        self.total_bet += chips;
    }
    pub(super) fn fold(&mut self) {
        self.is_folded = true;
    }
    pub(super) fn reset_bet(&mut self) {
        self.current_bet = 0;
    }
    pub(super) fn deal(&mut self, hole: Hole) {
        self.hand = Some(hole);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = match (self.is_active, self.is_folded) {
            (false, _) => "-",
            (true, true) => "F",
            (true, false) => "P",
        };
        let hand = self
            .hand
            .map(|h| h.to_string())
            .unwrap_or_else(|| String::from("--"));
        write!(
            f,
            "{:<3}{} {} {:>7} {:>6}",
            self.seat, status, hand, self.stack, self.current_bet
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn betting_moves_chips_out_of_stack() {
        let mut player = Player::new(1, 1000);
        player.bet(20);
        player.bet(40);
        assert_eq!(player.stack(), 940);
        assert_eq!(player.current_bet(), 60);
        assert_eq!(player.total_bet(), 60);
        assert_eq!(player.stack() + player.total_bet(), 1000);
    }

    #[test]
    fn phase_reset_keeps_total() {
        let mut player = Player::new(1, 1000);
        player.bet(20);
        player.reset_bet();
        assert_eq!(player.current_bet(), 0);
        assert_eq!(player.total_bet(), 20);
    }

    #[test]
    fn liveness() {
        let mut player = Player::new(2, 500);
        assert!(player.is_live());
        player.fold();
        assert!(!player.is_live());
        assert!(!Player::new(3, 500).inactive().is_live());
    }
}
