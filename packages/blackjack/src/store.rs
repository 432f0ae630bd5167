//! Per-player session registry.
//!
//! Sessions live in a sharded map keyed by player identity. Each session sits
//! behind its own reader/writer lock, so two requests for the same player are
//! serialized while unrelated players only meet on shard locks.

use crate::{Error, GameSession};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub type SessionHandle = Arc<RwLock<GameSession>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Seed for session shuffles. Sessions get reproducible decks in the
    /// order they are created.
    pub seed: Option<u64>,
    /// Sessions untouched for longer than this are dropped by `evict_idle`.
    pub idle_ttl_secs: Option<u64>,
}

impl StoreConfig {
    pub fn idle_ttl(&self) -> Option<Duration> {
        self.idle_ttl_secs.map(Duration::from_secs)
    }
}

struct StoreEntry {
    session: SessionHandle,
    last_access: Instant,
}

pub struct SessionStore {
    sessions: DashMap<String, StoreEntry>,
    seeder: Mutex<ChaCha8Rng>,
    idle_ttl: Option<Duration>,
}

impl SessionStore {
    pub fn new(config: StoreConfig) -> Self {
        let seeder = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            sessions: DashMap::new(),
            seeder: Mutex::new(seeder),
            idle_ttl: config.idle_ttl(),
        }
    }

    /// Return the player's session, dealing a new hand on first access.
    pub fn get_or_create(&self, identity: &str) -> Result<SessionHandle, Error> {
        self.get_or_create_at(identity, Instant::now())
    }

    pub(crate) fn get_or_create_at(&self, identity: &str, now: Instant) -> Result<SessionHandle, Error> {
        // The shard stays locked until the entry is filled, so racing first
        // requests for one identity build a single session.
        match self.sessions.entry(identity.to_string()) {
            Entry::Occupied(mut entry) => {
                let entry = entry.get_mut();
                entry.last_access = now;
                Ok(entry.session.clone())
            }
            Entry::Vacant(entry) => {
                let mut session = GameSession::with_rng(self.next_rng());
                session.start()?;
                let handle = Arc::new(RwLock::new(session));
                entry.insert(StoreEntry {
                    session: handle.clone(),
                    last_access: now,
                });
                log::info!("Created session for {identity}");
                Ok(handle)
            }
        }
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.sessions.contains_key(identity)
    }

    pub fn remove(&self, identity: &str) -> bool {
        self.sessions.remove(identity).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions idle past the configured TTL. Without a TTL nothing is
    /// evicted.
    pub fn evict_idle(&self, now: Instant) -> usize {
        match self.idle_ttl {
            Some(ttl) => self.evict_idle_for(ttl, now),
            None => 0,
        }
    }

    /// Drop sessions not accessed within `max_idle` of `now`.
    ///
    /// A caller still holding a `SessionHandle` keeps a live session: actions
    /// through it apply to that detached session, and the next
    /// `get_or_create` for the identity deals a fresh one.
    pub fn evict_idle_for(&self, max_idle: Duration, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.saturating_duration_since(entry.last_access) <= max_idle);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            log::info!("Evicted {evicted} idle sessions");
        }
        evicted
    }

    fn next_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seeder.lock().next_u64())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
