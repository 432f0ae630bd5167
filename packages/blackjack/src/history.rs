use crate::{Action, HandOutcome};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Where a table reports what players did and how their hands ended.
pub trait HistorySink: Send + Sync {
    fn record_action(&self, identity: &str, action: Action);
    fn record_outcome(&self, identity: &str, outcome: HandOutcome);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryRecord {
    Action { identity: String, action: Action },
    Outcome { identity: String, outcome: HandOutcome },
}

impl HistoryRecord {
    pub fn identity(&self) -> &str {
        match self {
            HistoryRecord::Action { identity, .. } | HistoryRecord::Outcome { identity, .. } => identity,
        }
    }
}

/// Wins, losses and pushes for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
}

impl Tally {
    pub fn add(&mut self, outcome: HandOutcome) {
        match outcome {
            HandOutcome::Win => self.wins += 1,
            HandOutcome::Loss => self.losses += 1,
            HandOutcome::Push => self.pushes += 1,
        }
    }

    pub fn hands(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }
}

/// Keeps every record in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<HistoryRecord> {
        self.records.lock().clone()
    }

    pub fn tally(&self, identity: &str) -> Tally {
        let mut tally = Tally::default();
        for record in self.records.lock().iter() {
            if let HistoryRecord::Outcome { identity: who, outcome } = record {
                if who == identity {
                    tally.add(*outcome);
                }
            }
        }
        tally
    }

    pub fn actions(&self, identity: &str) -> Vec<Action> {
        self.records
            .lock()
            .iter()
            .filter_map(|record| match record {
                HistoryRecord::Action { identity: who, action } if who == identity => Some(*action),
                _ => None,
            })
            .collect()
    }
}

impl HistorySink for MemoryHistory {
    fn record_action(&self, identity: &str, action: Action) {
        self.records.lock().push(HistoryRecord::Action {
            identity: identity.to_string(),
            action,
        });
    }

    fn record_outcome(&self, identity: &str, outcome: HandOutcome) {
        self.records.lock().push(HistoryRecord::Outcome {
            identity: identity.to_string(),
            outcome,
        });
    }
}
