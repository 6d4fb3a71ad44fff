//! Betting-round state machine for short-handed (two or three player) Hold'em.
//!
//! - [`cards`]: cards, decks, hole cards and the community board
//! - [`gameplay`]: the player ledger, the betting engine and the dealer
//! - [`gameroom`]: tables with persistent stacks and a thread-safe lobby
//! - [`players`]: decision makers that drive a table (robots and humans)
pub mod cards;
pub mod gameplay;
pub mod gameroom;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts, in chips.
pub type Chips = u32;
/// One-based seat number around the table.
pub type Seat = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest seated players that can start a hand.
pub const MIN_PLAYERS: usize = 2;
/// Most seated players a table supports.
pub const MAX_PLAYERS: usize = 3;
/// Default starting stack.
pub const STACK: Chips = 1000;
/// Default big blind.
pub const B_BLIND: Chips = 20;
/// Default small blind.
pub const S_BLIND: Chips = 10;
/// Hole cards dealt to each player.
pub const HOLE_CARDS: usize = 2;
/// Community cards dealt per hand.
pub const BOARD_CARDS: usize = 5;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Table parameters, loadable from a JSON file.
///
/// Every field falls back to the compile-time constant above when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub players: usize,
    pub stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            stack: STACK,
            small_blind: S_BLIND,
            big_blind: B_BLIND,
            seed: None,
        }
    }
}

impl Config {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
    /// Rejects blind structures and table sizes the engine cannot play.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.small_blind > 0, "small blind must be positive");
        anyhow::ensure!(
            self.big_blind >= self.small_blind,
            "big blind {} below small blind {}",
            self.big_blind,
            self.small_blind
        );
        anyhow::ensure!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players),
            "{} players requested, table seats {}..={}",
            self.players,
            MIN_PLAYERS,
            MAX_PLAYERS
        );
        Ok(())
    }
    /// The blind structure for a new hand.
    pub fn blinds(&self) -> gameplay::Blinds {
        gameplay::Blinds::new(self.small_blind, self.big_blind)
    }
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_inverted_blinds() {
        let config = Config {
            small_blind: 20,
            big_blind: 10,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_table_sizes() {
        for players in [0, 1, 4, 9] {
            let config = Config {
                players,
                ..Config::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn config_fills_missing_fields() {
        let config = serde_json::from_str::<Config>(r#"{ "players": 3, "seed": 7 }"#).unwrap();
        assert_eq!(config.players, 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.big_blind, B_BLIND);
        assert_eq!(config.stack, STACK);
    }

    #[test]
    fn ids_are_unique() {
        let a = ID::<Config>::default();
        let b = ID::<Config>::default();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
