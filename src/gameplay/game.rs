use super::*;
use crate::Chips;
use crate::Seat;
use crate::cards::*;
use rand::Rng;
use std::collections::BTreeSet;

/// The complete state of one hand.
///
/// `Game` is the betting state machine. It is a plain value: the caller
/// hydrates it (or receives it from [`Dealer::start`]), feeds it one action at
/// a time through [`apply`](Self::apply), and stores whatever comes back.
/// Nothing here does I/O or holds locks, so serializing actions per hand is
/// the caller's job.
///
/// # Fields
///
/// - `phase`: blinds → preflop → flop → turn → river → showdown
/// - `pot`: always the sum of every player's `total_bet`
/// - `current_bet`: the amount each live player must match this phase
/// - `current_seat`: whose turn it is; `None` before blinds and once the hand is over
/// - `acted`: seats that acted since the phase opened or since the last raise
/// - `board`: all five community cards, revealed by phase
/// - `deck`: the undealt remainder
/// - `players`: ledgers, sorted by seat
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    phase: Phase,
    pot: Chips,
    current_bet: Chips,
    current_seat: Option<Seat>,
    acted: BTreeSet<Seat>,
    blinds: Blinds,
    board: Board,
    deck: Deck,
    players: Vec<Player>,
}

/// Construction.
impl Game {
    /// Seats the given players for a new hand, before blinds are posted.
    ///
    /// Seats are one-based and unique. Between two and three of the players
    /// must be active; inactive seats stay in the ledger but never act.
    pub fn new<I>(players: I, blinds: Blinds) -> Result<Self, BettingError>
    where
        I: IntoIterator<Item = Player>,
    {
        let mut players = players.into_iter().collect::<Vec<_>>();
        players.sort_by_key(Player::seat);
        if let Some(p) = players.iter().find(|p| p.seat() == 0) {
            return Err(BettingError::InvalidSeat(p.seat()));
        }
        if let Some(w) = players.windows(2).find(|w| w[0].seat() == w[1].seat()) {
            return Err(BettingError::DuplicateSeat(w[0].seat()));
        }
        let active = players.iter().filter(|p| p.is_active()).count();
        if active < crate::MIN_PLAYERS {
            return Err(BettingError::NotEnoughPlayers {
                found: active,
                minimum: crate::MIN_PLAYERS,
            });
        }
        if active > crate::MAX_PLAYERS {
            return Err(BettingError::TooManyPlayers {
                found: active,
                maximum: crate::MAX_PLAYERS,
            });
        }
        Ok(Self {
            phase: Phase::Blinds,
            pot: players.iter().map(Player::total_bet).sum(),
            current_bet: 0,
            current_seat: None,
            acted: BTreeSet::new(),
            blinds,
            board: Board::empty(),
            deck: Deck::empty(),
            players,
        })
    }
}

/// Public state accessors.
impl Game {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Total chips committed by everyone this hand.
    pub fn pot(&self) -> Chips {
        self.pot
    }
    /// The amount every live player must have in front of them this phase.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    /// Whose turn it is, if anyone's.
    pub fn current_seat(&self) -> Option<Seat> {
        self.current_seat
    }
    /// Seats that have acted since the phase opened or the last raise.
    pub fn acted(&self) -> &BTreeSet<Seat> {
        &self.acted
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    /// The pre-dealt board, including cards not yet visible.
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Community cards the table may see in the current phase.
    pub fn visible_cards(&self) -> &[Card] {
        self.board.visible(self.phase.n_observed())
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.iter().find(|p| p.seat() == seat)
    }
    /// Seats still competing for the pot, ascending.
    pub fn contenders(&self) -> Vec<Seat> {
        self.live().map(Player::seat).collect()
    }
    /// The last player standing, once everyone else folded.
    pub fn winner(&self) -> Option<Seat> {
        match self.contenders().as_slice() {
            [seat] => Some(*seat),
            _ => None,
        }
    }
    /// True once the hand reached showdown or only one player remains.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Showdown || self.live().count() <= 1
    }
    /// Chips the seat must add to stay in.
    pub fn to_call(&self, seat: Seat) -> Chips {
        self.player(seat)
            .map(|p| self.current_bet.saturating_sub(p.current_bet()))
            .unwrap_or(0)
    }
    /// Smallest amount a raise may bet to: one big blind over the current bet.
    pub fn min_raise(&self) -> Chips {
        self.current_bet + self.blinds.big()
    }
    /// Actions the engine would accept from this seat right now.
    ///
    /// Empty unless it is the seat's turn. Raises are offered at the minimum
    /// size; any larger amount the stack covers is also accepted.
    pub fn legal(&self, seat: Seat) -> Vec<Action> {
        let Some(player) = self.player(seat) else {
            return vec![];
        };
        if self.current_seat != Some(seat) || !player.is_live() {
            return vec![];
        }
        let owed = self.to_call(seat);
        let mut options = Vec::with_capacity(3);
        if owed == 0 {
            options.push(Action::Check);
        } else if owed <= player.stack() {
            options.push(Action::Call);
        }
        options.push(Action::Fold);
        if self.min_raise() - player.current_bet() <= player.stack() {
            options.push(Action::Raise(self.min_raise()));
        }
        options
    }
}

/// Action validation and application.
impl Game {
    /// Returns the state after `seat` takes `action`, plus what changed.
    ///
    /// On error `self` is untouched and no new state is produced.
    pub fn apply(&self, seat: Seat, action: Action) -> Result<(Self, Outcome), BettingError> {
        let mut next = self.clone();
        let outcome = next.act(seat, action)?;
        Ok((next, outcome))
    }
    /// In-place variant of [`apply`](Self::apply).
    ///
    /// Validation runs to completion before anything is mutated, so an
    /// `Err` leaves the state exactly as it was.
    pub fn act(&mut self, seat: Seat, action: Action) -> Result<Outcome, BettingError> {
        let index = self.validate(seat, action)?;
        log::debug!("seat {} {:?} ({})", seat, action, self.phase);
        self.commit(index, action);
        let outcome = self.advance(seat);
        debug_assert!(self.is_consistent(), "inconsistent state:\n{}", self);
        Ok(outcome)
    }
    /// Settlement: everyone else folded, or every live player acted this
    /// phase and matched the current bet.
    pub fn is_phase_complete(&self) -> bool {
        self.is_everyone_folding() || self.is_everyone_calling()
    }

    fn validate(&self, seat: Seat, action: Action) -> Result<usize, BettingError> {
        if self.current_seat != Some(seat) {
            return Err(BettingError::NotYourTurn {
                seat,
                expected: self.current_seat,
            });
        }
        let index = self
            .players
            .iter()
            .position(|p| p.seat() == seat)
            .ok_or(BettingError::InactivePlayer(seat))?;
        let player = &self.players[index];
        if !player.is_live() {
            return Err(BettingError::InactivePlayer(seat));
        }
        let owed = self.current_bet.saturating_sub(player.current_bet());
        let stack = player.stack();
        match action {
            Action::Fold => Ok(index),
            Action::Check if owed > 0 => Err(BettingError::InvalidCheck { seat, owed }),
            Action::Check => Ok(index),
            Action::Call if owed > stack => Err(BettingError::InsufficientStack {
                seat,
                needed: owed,
                stack,
            }),
            Action::Call => Ok(index),
            Action::Raise(amount) if amount <= self.current_bet => {
                Err(BettingError::RaiseTooSmall {
                    amount,
                    minimum: self.min_raise(),
                })
            }
            Action::Raise(amount) if amount.saturating_sub(player.current_bet()) > stack => {
                Err(BettingError::InsufficientStack {
                    seat,
                    needed: amount.saturating_sub(player.current_bet()),
                    stack,
                })
            }
            Action::Raise(amount) if amount - self.current_bet < self.blinds.big() => {
                Err(BettingError::RaiseTooSmall {
                    amount,
                    minimum: self.min_raise(),
                })
            }
            Action::Raise(_) => Ok(index),
        }
    }
    fn commit(&mut self, index: usize, action: Action) {
        let seat = self.players[index].seat();
        match action {
            Action::Fold => self.players[index].fold(),
            Action::Check => {}
            Action::Call => {
                let owed = self
                    .current_bet
                    .saturating_sub(self.players[index].current_bet());
                self.bet(index, owed);
            }
            Action::Raise(amount) => {
                let more = amount - self.players[index].current_bet();
                self.bet(index, more);
                self.current_bet = amount;
                self.acted.clear();
            }
        }
        self.acted.insert(seat);
    }
    fn bet(&mut self, index: usize, chips: Chips) {
        self.pot += chips;
        self.players[index].bet(chips);
    }
}

/// Phase and turn advancement.
impl Game {
    fn advance(&mut self, seat: Seat) -> Outcome {
        if !self.is_phase_complete() {
            self.current_seat = self.next_seat(seat);
            return Outcome::pending();
        }
        match self.contenders().as_slice() {
            [winner] => {
                log::info!("seat {} wins {} uncontested", winner, self.pot);
                self.current_seat = None;
                Outcome::uncontested(*winner)
            }
            [] => {
                self.current_seat = None;
                Outcome {
                    hand_ended: true,
                    ..Outcome::default()
                }
            }
            _ => self.next_phase(),
        }
    }
    fn next_phase(&mut self) -> Outcome {
        self.phase = self.phase.next().unwrap_or(Phase::Showdown);
        self.current_bet = 0;
        self.acted.clear();
        for player in self.players.iter_mut() {
            player.reset_bet();
        }
        log::info!("{} opens with {} in the pot", self.phase, self.pot);
        if self.phase == Phase::Showdown {
            self.current_seat = None;
            Outcome::showdown()
        } else {
            let first = self.live().map(Player::seat).next();
            self.current_seat = first;
            Outcome::advanced()
        }
    }
    /// The next live seat after `from`, wrapping past the highest seat.
    fn next_seat(&self, from: Seat) -> Option<Seat> {
        self.live()
            .map(Player::seat)
            .find(|s| *s > from)
            .or_else(|| self.live().map(Player::seat).next())
    }
    fn live(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_live())
    }
}

/// Settlement predicates.
impl Game {
    /// At most one live player remains.
    fn is_everyone_folding(&self) -> bool {
        self.live().count() <= 1
    }
    /// Every live player has acted and matched.
    fn is_everyone_calling(&self) -> bool {
        self.is_everyone_touched() && self.is_everyone_matched()
    }
    /// Every live player has acted since the phase opened or the last raise.
    fn is_everyone_touched(&self) -> bool {
        self.live().all(|p| self.acted.contains(&p.seat()))
    }
    /// Every live player is in for the current bet.
    fn is_everyone_matched(&self) -> bool {
        self.live().all(|p| p.current_bet() == self.current_bet)
    }
    fn is_consistent(&self) -> bool {
        let pot = self.players.iter().map(Player::total_bet).sum::<Chips>();
        let top = self.live().map(Player::current_bet).max().unwrap_or(0);
        let turn = match self.current_seat {
            Some(seat) => self.player(seat).is_some_and(Player::is_live),
            None => true,
        };
        self.pot == pot && self.current_bet >= top && turn
    }
}

/// Dealing steps, sequenced by [`Dealer`].
impl Game {
    /// The two lowest live seats post small and big blind, each clamped to
    /// its stack. The small blind acts first and the phase moves to preflop.
    pub fn post_blinds(&mut self) -> Result<(), BettingError> {
        if self.phase != Phase::Blinds {
            return Err(BettingError::OutOfPhase(self.phase));
        }
        let (small, big) = match self.contenders().as_slice() {
            [small, big, ..] => (*small, *big),
            seats => {
                return Err(BettingError::NotEnoughPlayers {
                    found: seats.len(),
                    minimum: crate::MIN_PLAYERS,
                });
            }
        };
        self.post(small, self.blinds.small());
        self.post(big, self.blinds.big());
        self.current_bet = self.blinds.big();
        self.current_seat = Some(small);
        self.phase = Phase::Preflop;
        Ok(())
    }
    /// Shuffles a fresh deck and deals two cards to every live player.
    ///
    /// Once any hole cards or board cards are out, the hand keeps its deck.
    pub fn deal_hole_cards<R>(&mut self, rng: &mut R) -> Result<(), BettingError>
    where
        R: Rng + ?Sized,
    {
        if self.phase > Phase::Preflop {
            return Err(BettingError::OutOfPhase(self.phase));
        }
        if self.is_dealt() {
            return Err(BettingError::AlreadyDealt);
        }
        let mut deck = Deck::new().shuffled(rng);
        let holes = deck.deal(self.live().count(), crate::HOLE_CARDS)?;
        for (player, cards) in self
            .players
            .iter_mut()
            .filter(|p| p.is_live())
            .zip(holes)
        {
            let hole = Hole::from((cards[0], cards[1]));
            log::trace!("seat {} dealt {}", player.seat(), hole);
            player.deal(hole);
        }
        self.deck = deck;
        Ok(())
    }
    /// Draws all five community cards from the remaining deck.
    pub fn deal_community_cards(&mut self) -> Result<(), BettingError> {
        if self.phase > Phase::Preflop {
            return Err(BettingError::OutOfPhase(self.phase));
        }
        if self.board.size() > 0 {
            return Err(BettingError::AlreadyDealt);
        }
        let cards = self.deck.draw(crate::BOARD_CARDS)?;
        self.board = Board::from(cards);
        log::trace!("board {}", self.board);
        Ok(())
    }
    fn is_dealt(&self) -> bool {
        self.board.size() > 0 || self.players.iter().any(|p| p.hand().is_some())
    }
    fn post(&mut self, seat: Seat, blind: Chips) {
        if let Some(index) = self.players.iter().position(|p| p.seat() == seat) {
            let chips = blind.min(self.players[index].stack());
            log::trace!("seat {} posts {}", seat, chips);
            self.bet(index, chips);
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for player in self.players.iter() {
            let marker = if self.current_seat == Some(player.seat()) {
                ">"
            } else {
                " "
            };
            writeln!(f, "{}{}", marker, player)?;
        }
        writeln!(f, "Phase {}", self.phase)?;
        writeln!(f, "Pot   {}", self.pot)?;
        write!(f, "Board ")?;
        for card in self.visible_cards() {
            write!(f, "{}  ", card)?;
        }
        writeln!(f)
    }
}
