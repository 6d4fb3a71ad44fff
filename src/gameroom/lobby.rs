use super::*;
use crate::Config;
use crate::ID;
use crate::Seat;
use crate::Unique;
use crate::gameplay::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::RwLock;

/// Registry of open rooms, safe to share across threads.
///
/// Each room sits behind its own mutex, so actions for one room are applied
/// one at a time while different rooms proceed independently.
#[derive(Debug, Default)]
pub struct Lobby {
    rooms: RwLock<HashMap<ID<Room>, Arc<Mutex<Room>>>>,
}

impl Lobby {
    /// Opens an empty room and returns its id.
    pub fn open(&self, config: Config) -> anyhow::Result<ID<Room>> {
        config.validate()?;
        let room = Room::from(config);
        let id = room.id();
        self.rooms
            .write()
            .map_err(|_| anyhow::anyhow!("lobby lock poisoned"))?
            .insert(id, Arc::new(Mutex::new(room)));
        log::info!("opened room {}", id);
        Ok(id)
    }
    /// Closes a room, handing back its last state.
    pub fn close(&self, id: ID<Room>) -> anyhow::Result<Arc<Mutex<Room>>> {
        self.rooms
            .write()
            .map_err(|_| anyhow::anyhow!("lobby lock poisoned"))?
            .remove(&id)
            .inspect(|_| log::info!("closed room {}", id))
            .ok_or_else(|| anyhow::anyhow!("room {} not found", id))
    }
    pub fn get(&self, id: ID<Room>) -> anyhow::Result<Arc<Mutex<Room>>> {
        self.rooms
            .read()
            .map_err(|_| anyhow::anyhow!("lobby lock poisoned"))?
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("room {} not found", id))
    }
    /// Runs `f` with exclusive access to one room.
    pub fn with<F, T>(&self, id: ID<Room>, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(&mut Room) -> anyhow::Result<T>,
    {
        let room = self.get(id)?;
        let mut room = room
            .lock()
            .map_err(|_| anyhow::anyhow!("room {} lock poisoned", id))?;
        f(&mut room)
    }
    /// Applies one action to a room's running hand.
    pub fn submit(&self, id: ID<Room>, seat: Seat, action: Action) -> anyhow::Result<Outcome> {
        self.with(id, |room| room.act(seat, action))
    }
    /// Ids of every open room.
    pub fn rooms(&self) -> anyhow::Result<Vec<ID<Room>>> {
        Ok(self
            .rooms
            .read()
            .map_err(|_| anyhow::anyhow!("lobby lock poisoned"))?
            .keys()
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            seed: Some(11),
            ..Config::default()
        }
    }

    #[test]
    fn open_and_close() {
        let lobby = Lobby::default();
        let a = lobby.open(config()).unwrap();
        let b = lobby.open(config()).unwrap();
        assert_ne!(a, b);
        assert_eq!(lobby.rooms().unwrap().len(), 2);
        assert!(lobby.close(a).is_ok());
        assert!(lobby.get(a).is_err());
        assert!(lobby.get(b).is_ok());
    }

    #[test]
    fn invalid_config_rejected() {
        let lobby = Lobby::default();
        let config = Config {
            players: 5,
            ..config()
        };
        assert!(lobby.open(config).is_err());
    }

    #[test]
    fn submit_routes_to_room() {
        let lobby = Lobby::default();
        let id = lobby.open(config()).unwrap();
        lobby
            .with(id, |room| {
                room.sit(1)?;
                room.sit(2)?;
                room.start().map(|_| ())
            })
            .unwrap();
        assert!(lobby.submit(id, 2, Action::Call).is_err());
        let outcome = lobby.submit(id, 1, Action::Call).unwrap();
        assert!(!outcome.hand_ended);
        let outcome = lobby.submit(id, 2, Action::Check).unwrap();
        assert!(outcome.phase_advanced);
        let history = lobby.with(id, |room| Ok(room.history().len())).unwrap();
        assert_eq!(history, 2);
    }

    /// concurrent submissions to one room are serialized
    #[test]
    fn concurrent_submissions() {
        let lobby = Arc::new(Lobby::default());
        let id = lobby.open(config()).unwrap();
        lobby
            .with(id, |room| {
                room.sit(1)?;
                room.sit(2)?;
                room.start().map(|_| ())
            })
            .unwrap();
        let handles = (0..8)
            .map(|_| {
                let lobby = lobby.clone();
                std::thread::spawn(move || lobby.submit(id, 1, Action::Call).is_ok())
            })
            .collect::<Vec<_>>();
        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(accepted, 1);
        let pot = lobby
            .with(id, |room| Ok(room.game().map(Game::pot)))
            .unwrap();
        assert_eq!(pot, Some(40));
    }
}
