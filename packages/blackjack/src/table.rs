//! Request-side composition of the engine.
//!
//! A `Table` resolves a player's session, applies one action under the
//! session's write lock and reports to a `HistorySink`: one record per action
//! and one outcome per finished hand, no matter how often a finished hand is
//! poked again.

use crate::{Error, HistorySink, SessionStore, Snapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    NewGame,
    Hit,
    Stand,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::NewGame => "new_game",
            Action::Hit => "hit",
            Action::Stand => "stand",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    /// Accepts the action name or its first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "new" | "new_game" => Ok(Action::NewGame),
            "h" | "hit" => Ok(Action::Hit),
            "s" | "stand" => Ok(Action::Stand),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

pub struct Table<S> {
    store: SessionStore,
    sink: S,
}

impl<S: HistorySink> Table<S> {
    pub fn new(store: SessionStore, sink: S) -> Self {
        Self { store, sink }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Current state of the player's hand. Records nothing.
    pub fn view(&self, identity: &str) -> Result<Snapshot, Error> {
        let handle = self.store.get_or_create(identity)?;
        let snapshot = handle.read().snapshot();
        Ok(snapshot)
    }

    pub fn act(&self, identity: &str, action: Action) -> Result<Snapshot, Error> {
        let handle = self.store.get_or_create(identity)?;

        let (snapshot, outcome) = {
            let mut session = handle.write();
            match action {
                Action::NewGame => session.start()?,
                Action::Hit => session.hit()?,
                Action::Stand => session.stand()?,
            }
            (session.snapshot(), session.take_unreported_outcome())
        };

        self.sink.record_action(identity, action);
        if let Some(outcome) = outcome {
            log::info!("{identity}: {outcome}");
            self.sink.record_outcome(identity, outcome);
        }
        Ok(snapshot)
    }
}
