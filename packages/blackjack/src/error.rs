use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Deck exhausted: no cards left to deal")]
    DeckExhausted,
    #[error("Invalid card index: {0}")]
    InvalidCardIndex(usize),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
