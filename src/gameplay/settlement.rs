use super::*;
use crate::Chips;
use crate::Seat;
use colored::Colorize;

/// What one seat put in and took out of a finished hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Payout {
    pub seat: Seat,
    pub risked: Chips,
    pub reward: Chips,
}

impl Payout {
    /// Profit or loss for the hand.
    pub fn net(&self) -> i64 {
        self.reward as i64 - self.risked as i64
    }
}

impl std::fmt::Display for Payout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let net = match self.net() {
            n if n > 0 => format!("+{}", n).green(),
            n if n < 0 => format!("{}", n).red(),
            _ => String::from("0").normal(),
        };
        write!(f, "seat {:<3}{:>8}", self.seat, net)
    }
}

/// Pot distribution.
impl Game {
    /// Splits the pot between `winners` and reports every active seat.
    ///
    /// An uncontested hand may pass no winners and the last player standing
    /// takes the pot. Otherwise each named seat must still be contending.
    /// Odd chips go to the lowest winning seats.
    pub fn settle(&self, winners: &[Seat]) -> Result<Vec<Payout>, BettingError> {
        if !self.is_over() {
            return Err(BettingError::NotOver);
        }
        let contenders = self.contenders();
        let mut winners = match (winners.is_empty(), self.winner()) {
            (true, Some(sole)) => vec![sole],
            (true, None) => return Err(BettingError::NoWinners),
            (false, _) => winners.to_vec(),
        };
        if let Some(seat) = winners.iter().find(|s| !contenders.contains(s)) {
            return Err(BettingError::UnknownWinner(*seat));
        }
        winners.sort_unstable();
        winners.dedup();
        let n = winners.len() as Chips;
        let share = self.pot() / n;
        let odd = (self.pot() % n) as usize;
        let payouts = self
            .players()
            .iter()
            .filter(|p| p.is_active())
            .map(|p| Payout {
                seat: p.seat(),
                risked: p.total_bet(),
                reward: match winners.iter().position(|w| *w == p.seat()) {
                    Some(rank) if rank < odd => share + 1,
                    Some(_) => share,
                    None => 0,
                },
            })
            .collect::<Vec<_>>();
        log::info!(
            "pot {} settled to {}",
            self.pot(),
            winners
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(payouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn table(n: usize) -> Game {
        Dealer::new(SmallRng::seed_from_u64(7))
            .start((1..=n).map(|s| Player::new(s, 1000)), Blinds::new(10, 20))
            .unwrap()
    }

    fn showdown(n: usize, raise: Chips) -> Game {
        let mut game = table(n);
        game.act(1, Action::Raise(raise)).unwrap();
        while !game.is_over() {
            let seat = game.current_seat().unwrap();
            let action = match game.to_call(seat) {
                0 => Action::Check,
                _ => Action::Call,
            };
            game.act(seat, action).unwrap();
        }
        game
    }

    #[test]
    fn running_hand_cannot_settle() {
        assert_eq!(table(2).settle(&[1]), Err(BettingError::NotOver));
    }

    #[test]
    fn uncontested_pot_needs_no_names() {
        let (game, _) = table(3).apply(1, Action::Fold).unwrap();
        let (game, _) = game.apply(2, Action::Fold).unwrap();
        let payouts = game.settle(&[]).unwrap();
        assert_eq!(
            payouts,
            vec![
                Payout { seat: 1, risked: 10, reward: 0 },
                Payout { seat: 2, risked: 20, reward: 0 },
                Payout { seat: 3, risked: 0, reward: 30 },
            ]
        );
        assert_eq!(game.settle(&[2]), Err(BettingError::UnknownWinner(2)));
    }

    #[test]
    fn showdown_needs_a_winner() {
        let game = showdown(2, 40);
        assert_eq!(game.phase(), Phase::Showdown);
        assert_eq!(game.settle(&[]), Err(BettingError::NoWinners));
        let payouts = game.settle(&[2]).unwrap();
        assert_eq!(payouts[0].net(), -40);
        assert_eq!(payouts[1].net(), 40);
    }

    /// odd chips go to the lowest winning seats
    #[test]
    fn split_pot_remainder() {
        let game = showdown(3, 41);
        assert_eq!(game.pot(), 123);
        let payouts = game.settle(&[3, 2]).unwrap();
        assert_eq!(payouts[0].reward, 0);
        assert_eq!(payouts[1].reward, 62);
        assert_eq!(payouts[2].reward, 61);
        let total = payouts.iter().map(|p| p.reward).sum::<Chips>();
        assert_eq!(total, game.pot());
    }

    #[test]
    fn duplicate_winners_count_once() {
        let game = showdown(2, 40);
        let payouts = game.settle(&[1, 1, 2]).unwrap();
        assert_eq!(payouts[0].reward, 40);
        assert_eq!(payouts[1].reward, 40);
    }
}
