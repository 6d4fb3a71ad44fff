use super::*;
use crate::Chips;
use crate::Config;
use crate::ID;
use crate::Seat;
use crate::Unique;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;

/// A table that outlives individual hands.
///
/// The room keeps each seat's stack between hands, deals new hands through
/// its [`Dealer`], records every accepted action of the current hand, and
/// moves the pot back into stacks once the hand is settled. Hands that end
/// by folds are settled as soon as the last fold lands; showdowns wait for
/// [`settle`](Self::settle) to name the winners.
#[derive(Debug)]
pub struct Room {
    id: ID<Self>,
    config: Config,
    dealer: Dealer<SmallRng>,
    stacks: BTreeMap<Seat, Chips>,
    hand: Option<(ID<Game>, Game)>,
    history: Vec<(Seat, Action)>,
    payouts: Vec<Payout>,
    played: usize,
}

impl Unique for Room {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl From<Config> for Room {
    fn from(config: Config) -> Self {
        let dealer = match config.seed {
            Some(seed) => Dealer::seeded(seed),
            None => Dealer::new(SmallRng::from_rng(&mut rand::rng())),
        };
        Self {
            id: ID::default(),
            config,
            dealer,
            stacks: BTreeMap::new(),
            hand: None,
            history: Vec::new(),
            payouts: Vec::new(),
            played: 0,
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::from(Config::default())
    }
}

/// Seating.
impl Room {
    /// Seats a player with the configured starting stack.
    pub fn sit(&mut self, seat: Seat) -> anyhow::Result<()> {
        self.buy_in(seat, self.config.stack)
    }
    /// Seats a player with an explicit stack.
    pub fn buy_in(&mut self, seat: Seat, stack: Chips) -> anyhow::Result<()> {
        anyhow::ensure!(seat > 0, "seat {} is not a valid seat number", seat);
        anyhow::ensure!(!self.stacks.contains_key(&seat), "seat {} is taken", seat);
        anyhow::ensure!(
            self.stacks.len() < crate::MAX_PLAYERS,
            "room {} is full",
            self.id
        );
        self.stacks.insert(seat, stack);
        log::info!("seat {} sits in room {} with {}", seat, self.id, stack);
        Ok(())
    }
    /// Removes a player and returns their stack. Not allowed mid-hand.
    pub fn leave(&mut self, seat: Seat) -> anyhow::Result<Chips> {
        anyhow::ensure!(self.hand.is_none(), "seat {} cannot leave mid-hand", seat);
        self.stacks
            .remove(&seat)
            .inspect(|stack| log::info!("seat {} leaves room {} with {}", seat, self.id, stack))
            .ok_or_else(|| anyhow::anyhow!("seat {} is empty", seat))
    }
    /// At least two players with chips and no hand running.
    pub fn is_ready(&self) -> bool {
        self.hand.is_none() && self.stacks.values().filter(|s| **s > 0).count() >= crate::MIN_PLAYERS
    }
}

/// Hand lifecycle.
impl Room {
    /// Deals a new hand to every seat with chips. Busted seats sit out.
    pub fn start(&mut self) -> anyhow::Result<ID<Game>> {
        anyhow::ensure!(self.hand.is_none(), "a hand is already running");
        let players = self
            .stacks
            .iter()
            .map(|(seat, stack)| match stack {
                0 => Player::new(*seat, 0).inactive(),
                _ => Player::new(*seat, *stack),
            })
            .collect::<Vec<_>>();
        let game = self.dealer.start(players, self.config.blinds())?;
        let id = ID::default();
        log::info!("room {} deals hand {}", self.id, id);
        self.history.clear();
        self.payouts.clear();
        self.hand = Some((id, game));
        Ok(id)
    }
    /// Applies one action to the running hand.
    ///
    /// A rejected action leaves the hand untouched. When the action ends the
    /// hand uncontested, the pot is paid out before returning.
    pub fn act(&mut self, seat: Seat, action: Action) -> anyhow::Result<Outcome> {
        let (_, game) = self
            .hand
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("no hand running in room {}", self.id))?;
        let outcome = game.act(seat, action)?;
        self.history.push((seat, action));
        if outcome.hand_ended && outcome.winner.is_some() {
            self.settle(&[])?;
        }
        Ok(outcome)
    }
    /// Pays out a finished hand and returns every seat's result.
    pub fn settle(&mut self, winners: &[Seat]) -> anyhow::Result<Vec<Payout>> {
        let (_, game) = self
            .hand
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("no hand running in room {}", self.id))?;
        let payouts = game.settle(winners)?;
        for payout in payouts.iter() {
            if let Some(stack) = self.stacks.get_mut(&payout.seat) {
                *stack = *stack - payout.risked + payout.reward;
            }
        }
        self.hand = None;
        self.played += 1;
        self.payouts = payouts.clone();
        Ok(payouts)
    }
    /// Plays one hand to the end, asking `agents` for every decision and
    /// `judge` for the winners of a showdown.
    ///
    /// Agents are notified of each action once the hand accepts it. If an
    /// agent's action is rejected, or the hand cannot be settled, the hand is
    /// abandoned with every stack as it was before the deal and the error is
    /// returned.
    pub fn play<J>(
        &mut self,
        agents: &mut BTreeMap<Seat, Box<dyn Agent>>,
        mut judge: J,
    ) -> anyhow::Result<Vec<Payout>>
    where
        J: FnMut(&Game) -> Vec<Seat>,
    {
        self.start()?;
        let result = self.drive(agents, &mut judge);
        if let Err(ref e) = result {
            log::warn!("room {} abandons hand: {}", self.id, e);
            self.abandon();
        }
        result
    }
    /// Drops the running hand without paying anyone. Stacks only move on
    /// settlement, so every seat keeps what it had before the deal.
    pub fn abandon(&mut self) {
        if let Some((id, _)) = self.hand.take() {
            log::info!("room {} abandoned hand {}", self.id, id);
        }
    }
    fn drive<J>(
        &mut self,
        agents: &mut BTreeMap<Seat, Box<dyn Agent>>,
        judge: &mut J,
    ) -> anyhow::Result<Vec<Payout>>
    where
        J: FnMut(&Game) -> Vec<Seat>,
    {
        loop {
            let Some((_, game)) = self.hand.as_ref() else {
                return Ok(self.payouts.clone());
            };
            let Some(seat) = game.current_seat() else {
                let winners = judge(game);
                return self.settle(&winners);
            };
            let action = agents
                .get_mut(&seat)
                .ok_or_else(|| anyhow::anyhow!("nobody decides for seat {}", seat))?
                .decide(game, seat);
            let outcome = self.act(seat, action)?;
            for agent in agents.values_mut() {
                agent.notify(seat, action, &outcome);
            }
        }
    }
}

/// Read access.
impl Room {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn stacks(&self) -> &BTreeMap<Seat, Chips> {
        &self.stacks
    }
    pub fn stack(&self, seat: Seat) -> Option<Chips> {
        self.stacks.get(&seat).copied()
    }
    /// The running hand, if any.
    pub fn game(&self) -> Option<&Game> {
        self.hand.as_ref().map(|(_, game)| game)
    }
    pub fn hand_id(&self) -> Option<ID<Game>> {
        self.hand.as_ref().map(|(id, _)| *id)
    }
    /// Accepted actions of the running or last hand, in order.
    pub fn history(&self) -> &[(Seat, Action)] {
        &self.history
    }
    /// Results of the last settled hand.
    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }
    /// Hands settled so far.
    pub fn played(&self) -> usize {
        self.played
    }
    /// Chips on the table, including any in the running pot.
    pub fn chips(&self) -> Chips {
        self.stacks.values().sum()
    }
}
