use crate::Chips;
use crate::Seat;
use crate::gameplay::*;
use crate::gameroom::Agent;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Picks a random legal action, weighted towards calling.
///
/// Never folds when checking is free. Raises land anywhere between the
/// minimum raise and one pot over it, limited by the stack.
#[derive(Debug, Clone)]
pub struct Robot {
    rng: SmallRng,
}

impl Robot {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    fn weight(&self, game: &Game, seat: Seat, action: &Action) -> u32 {
        match action {
            Action::Fold if game.to_call(seat) == 0 => 0,
            Action::Fold => 1500,
            Action::Check => 1000,
            Action::Call => 4000,
            Action::Raise(_) => 500,
        }
    }

    fn sizing(&mut self, game: &Game, seat: Seat, min: Chips) -> Chips {
        let max = game
            .player(seat)
            .map(|p| p.current_bet() + p.stack())
            .unwrap_or(min)
            .min(min + game.pot())
            .max(min);
        self.rng.random_range(min..=max)
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Agent for Robot {
    fn decide(&mut self, game: &Game, seat: Seat) -> Action {
        let choices = game
            .legal(seat)
            .into_iter()
            .map(|a| (a, self.weight(game, seat, &a)))
            .collect::<Vec<_>>();
        let action = choices
            .choose_weighted(&mut self.rng, |(_, w)| *w)
            .map(|(a, _)| *a)
            .unwrap_or(Action::Fold);
        match action {
            Action::Raise(min) => Action::Raise(self.sizing(game, seat, min)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Dealer::seeded(5)
            .start((1..=3).map(|s| Player::new(s, 1000)), Blinds::default())
            .unwrap()
    }

    #[test]
    fn decisions_are_legal() {
        let mut robot = Robot::seeded(0);
        let game = game();
        for _ in 0..500 {
            let action = robot.decide(&game, 1);
            assert!(game.apply(1, action).is_ok(), "{:?} rejected", action);
        }
    }

    #[test]
    fn never_folds_for_free() {
        let mut robot = Robot::seeded(1);
        let (game, _) = game().apply(1, Action::Call).unwrap();
        for _ in 0..500 {
            assert_ne!(robot.decide(&game, 2), Action::Fold);
        }
    }

    #[test]
    fn plays_hands_to_the_end() {
        let mut robot = Robot::seeded(2);
        for seed in 0..50 {
            let mut game = Dealer::seeded(seed)
                .start((1..=3).map(|s| Player::new(s, 1000)), Blinds::default())
                .unwrap();
            while let Some(seat) = game.current_seat() {
                let action = robot.decide(&game, seat);
                game.act(seat, action).unwrap();
            }
            assert!(game.is_over());
        }
    }
}
