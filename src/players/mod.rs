pub mod robot;
pub use robot::*;

#[cfg(feature = "server")]
pub mod human;
#[cfg(feature = "server")]
pub use human::*;
