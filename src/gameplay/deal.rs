use super::*;
use crate::Chips;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Forced bets for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Blinds {
    small: Chips,
    big: Chips,
}

impl Blinds {
    pub const fn new(small: Chips, big: Chips) -> Self {
        Self { small, big }
    }
    pub const fn small(&self) -> Chips {
        self.small
    }
    pub const fn big(&self) -> Chips {
        self.big
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self::new(crate::S_BLIND, crate::B_BLIND)
    }
}

impl std::fmt::Display for Blinds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}

/// Turns a seated table into a hand ready for its first action.
///
/// Owns the randomness so that a seeded dealer replays the same cards.
#[derive(Debug, Clone)]
pub struct Dealer<R> {
    rng: R,
}

impl<R> Dealer<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
    /// Validates the table, posts blinds, deals hole cards, then the board.
    pub fn start<I>(&mut self, players: I, blinds: Blinds) -> Result<Game, BettingError>
    where
        I: IntoIterator<Item = Player>,
    {
        let mut game = Game::new(players, blinds)?;
        game.post_blinds()?;
        game.deal_hole_cards(&mut self.rng)?;
        game.deal_community_cards()?;
        log::debug!("dealt new hand at {}\n{}", blinds, game);
        Ok(game)
    }
}

impl Dealer<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Dealer<SmallRng> {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(n: usize) -> impl Iterator<Item = Player> {
        (1..=n).map(|s| Player::new(s, crate::STACK))
    }

    #[test]
    fn default_blinds() {
        assert_eq!(Blinds::default(), Blinds::new(10, 20));
        assert_eq!(Blinds::default().to_string(), "10/20");
    }

    #[test]
    fn seeded_dealers_agree() {
        let a = Dealer::seeded(42).start(seats(3), Blinds::default()).unwrap();
        let b = Dealer::seeded(42).start(seats(3), Blinds::default()).unwrap();
        let c = Dealer::seeded(43).start(seats(3), Blinds::default()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.board(), c.board());
    }

    #[test]
    fn consecutive_hands_differ() {
        let mut dealer = Dealer::seeded(42);
        let a = dealer.start(seats(2), Blinds::default()).unwrap();
        let b = dealer.start(seats(2), Blinds::default()).unwrap();
        assert_ne!(a.deck(), b.deck());
    }

    #[test]
    fn hands_ready_to_play() {
        let game = Dealer::<SmallRng>::default().start(seats(3), Blinds::default()).unwrap();
        assert_eq!(game.phase(), Phase::Preflop);
        assert_eq!(game.current_seat(), Some(1));
        assert!(game.players().iter().all(|p| p.hand().is_some()));
        assert_eq!(game.board().size(), 5);
        assert_eq!(game.deck().size(), 41);
    }

    #[test]
    fn table_size_checked() {
        let mut dealer = Dealer::seeded(0);
        assert!(matches!(
            dealer.start(seats(1), Blinds::default()),
            Err(BettingError::NotEnoughPlayers { .. })
        ));
        assert!(matches!(
            dealer.start(seats(4), Blinds::default()),
            Err(BettingError::TooManyPlayers { .. })
        ));
    }
}
