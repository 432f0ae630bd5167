mod card;
mod deck;
mod error;
mod hand;
mod history;
pub mod rules;
mod session;
mod snapshot;
mod store;
mod table;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use error::Error;
pub use hand::{calculate_hand_value, is_busted, is_soft_hand, Hand, HandOutcome};
pub use history::{HistoryRecord, HistorySink, MemoryHistory, Tally};
pub use session::{GameSession, GameStatus};
pub use snapshot::Snapshot;
pub use store::{SessionHandle, SessionStore, StoreConfig};
pub use table::{Action, Table};
