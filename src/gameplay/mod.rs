pub mod action;
pub use action::*;

pub mod deal;
pub use deal::*;

pub mod error;
pub use error::*;

pub mod game;
pub use game::*;

pub mod outcome;
pub use outcome::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;

pub mod settlement;
pub use settlement::*;
