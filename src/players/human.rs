use crate::Chips;
use crate::Seat;
use crate::gameplay::*;
use crate::gameroom::Agent;
use dialoguer::Input;
use dialoguer::Select;

/// Terminal player. Prompts for every decision.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn raise(&self, game: &Game, seat: Seat) -> dialoguer::Result<Chips> {
        let min = game.min_raise();
        let max = game
            .player(seat)
            .map(|p| p.current_bet() + p.stack())
            .unwrap_or(min);
        Input::<Chips>::new()
            .with_prompt(format!("Raise to ({}..={})", min, max))
            .report(false)
            .validate_with(move |amount: &Chips| -> Result<(), String> {
                match *amount {
                    a if a < min => Err(format!("raise to at least {}", min)),
                    a if a > max => Err(format!("raise to at most {}", max)),
                    _ => Ok(()),
                }
            })
            .interact_text()
    }

    fn prompt(&self, game: &Game, seat: Seat) -> dialoguer::Result<Action> {
        let legal = game.legal(seat);
        let items = legal
            .iter()
            .map(|a| match a {
                Action::Fold => String::from("Fold"),
                Action::Check => String::from("Check"),
                Action::Call => format!("Call {}", game.to_call(seat)),
                Action::Raise(_) => String::from("Raise"),
            })
            .collect::<Vec<_>>();
        let hole = game
            .player(seat)
            .and_then(Player::hand)
            .map(|h| h.to_string())
            .unwrap_or_default();
        let selection = Select::new()
            .with_prompt(format!("\nYOU HOLD {}", hole))
            .report(false)
            .items(items.as_slice())
            .default(0)
            .interact()?;
        match legal.get(selection).copied().unwrap_or(Action::Fold) {
            Action::Raise(_) => self.raise(game, seat).map(Action::Raise),
            action => Ok(action),
        }
    }
}

impl Agent for Human {
    fn decide(&mut self, game: &Game, seat: Seat) -> Action {
        println!("{}", game);
        self.prompt(game, seat).unwrap_or_else(|e| {
            log::warn!("input failed ({}), folding", e);
            Action::Fold
        })
    }

    fn notify(&mut self, seat: Seat, action: Action, outcome: &Outcome) {
        println!("seat {} {} ({})", seat, action, outcome);
    }
}
