use crate::{Card, GameStatus, HandOutcome};
use serde::{Deserialize, Serialize};

/// Read-only copy of a session, taken under its lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub status: GameStatus,
    pub outcome: Option<HandOutcome>,
    pub message: String,
}

impl Snapshot {
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Dealer cards the player may see. Only the up-card while the hand is
    /// in progress.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        if self.is_finished() {
            &self.dealer_cards
        } else {
            &self.dealer_cards[..self.dealer_cards.len().min(1)]
        }
    }

    pub fn hidden_dealer_cards(&self) -> usize {
        self.dealer_cards.len() - self.visible_dealer_cards().len()
    }
}
