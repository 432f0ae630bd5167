use crate::rules::{dealer_should_hit, resolve, BLACKJACK, INITIAL_HAND_SIZE};
use crate::{Deck, Error, Hand, HandOutcome, Snapshot};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use serde::{Deserialize, Serialize};

pub const START_MESSAGE: &str = "Game started. Hit or stand?";
pub const BUST_MESSAGE: &str = "You busted! Dealer wins.";
pub const DEALER_BUST_MESSAGE: &str = "Dealer busted! You win!";
pub const WIN_MESSAGE: &str = "You win!";
pub const LOSS_MESSAGE: &str = "Dealer wins.";
pub const PUSH_MESSAGE: &str = "Push (tie).";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// One player's hand against the dealer.
///
/// The player acts first (`hit` until bust or `stand`), then `stand` plays
/// the dealer out and settles. Once finished, `hit` and `stand` are no-ops
/// until the next `start`.
#[derive(Debug, Clone)]
pub struct GameSession {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    status: GameStatus,
    outcome: Option<HandOutcome>,
    message: String,
    outcome_reported: bool,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Unstarted session shuffling from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Unstarted session: empty hands, finished status, nothing to report.
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            deck: Deck::from_cards(Vec::new()),
            player: Hand::new(),
            dealer: Hand::new(),
            status: GameStatus::Finished,
            outcome: None,
            message: String::new(),
            outcome_reported: true,
            rng,
        }
    }

    /// Session picked up mid-hand with the player to act.
    pub fn resume(deck: Deck, player: Hand, dealer: Hand) -> Self {
        Self {
            deck,
            player,
            dealer,
            status: GameStatus::InProgress,
            outcome: None,
            message: START_MESSAGE.to_string(),
            outcome_reported: false,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn start(&mut self) -> Result<(), Error> {
        let mut deck = Deck::shuffled(&mut self.rng);
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..INITIAL_HAND_SIZE {
            player.add_card(deck.deal()?);
        }
        for _ in 0..INITIAL_HAND_SIZE {
            dealer.add_card(deck.deal()?);
        }

        log::debug!("New hand: player {} ({}), dealer {}", player, player.value(), dealer);

        self.deck = deck;
        self.player = player;
        self.dealer = dealer;
        self.status = GameStatus::InProgress;
        self.outcome = None;
        self.message = START_MESSAGE.to_string();
        self.outcome_reported = false;
        Ok(())
    }

    pub fn hit(&mut self) -> Result<(), Error> {
        if self.is_finished() {
            return Ok(());
        }

        let card = self.deck.deal()?;
        self.player.add_card(card);
        log::debug!("Player draws {card}, total {}", self.player.value());

        if self.player.is_busted() {
            self.finish(HandOutcome::Loss, BUST_MESSAGE);
        }
        Ok(())
    }

    pub fn stand(&mut self) -> Result<(), Error> {
        if self.is_finished() {
            return Ok(());
        }

        while dealer_should_hit(self.dealer.cards()) {
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
            log::debug!("Dealer draws {card}, total {}", self.dealer.value());
        }

        let dealer_total = self.dealer.value();
        let outcome = resolve(self.player.value(), dealer_total);
        let message = match outcome {
            HandOutcome::Win if dealer_total > BLACKJACK => DEALER_BUST_MESSAGE,
            HandOutcome::Win => WIN_MESSAGE,
            HandOutcome::Loss => LOSS_MESSAGE,
            HandOutcome::Push => PUSH_MESSAGE,
        };
        self.finish(outcome, message);
        Ok(())
    }

    fn finish(&mut self, outcome: HandOutcome, message: &str) {
        log::info!(
            "Hand settled: {outcome} (player {}, dealer {})",
            self.player.value(),
            self.dealer.value()
        );
        self.status = GameStatus::Finished;
        self.outcome = Some(outcome);
        self.message = message.to_string();
        self.outcome_reported = false;
    }

    /// Hand the finished outcome to the caller exactly once per hand.
    pub fn take_unreported_outcome(&mut self) -> Option<HandOutcome> {
        if self.status != GameStatus::Finished || self.outcome_reported {
            return None;
        }
        self.outcome_reported = true;
        self.outcome
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            player_total: self.player.value(),
            dealer_total: self.dealer.value(),
            status: self.status,
            outcome: self.outcome,
            message: self.message.clone(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
