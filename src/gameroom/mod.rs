mod agent;
mod lobby;
mod room;

pub use agent::*;
pub use lobby::*;
pub use room::*;
