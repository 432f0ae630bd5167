use crate::rules::BLACKJACK;
use crate::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
}

impl HandOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandOutcome::Win => "win",
            HandOutcome::Loss => "loss",
            HandOutcome::Push => "push",
        }
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calculate the value of a blackjack hand.
///
/// Recomputed from the full card list on every call. Aces start at 11 and
/// are downgraded to 1, one at a time, while the total is over 21.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut aces = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value() as u16;
    }

    while total > BLACKJACK as u16 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total.min(u8::MAX as u16) as u8
}

/// Check if a hand is soft (an ace is still counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    let hard: u16 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { c.value() as u16 })
        .sum();
    cards.iter().any(Card::is_ace) && hard + 10 <= BLACKJACK as u16
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Cards held by one party. Append-only within a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_calculate_hand_value_no_aces() {
        let cards = vec![card(Rank::Ten, Suit::Hearts), card(Rank::Nine, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 19);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        let cards = vec![card(Rank::King, Suit::Hearts), card(Rank::Queen, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 20);
    }

    #[test]
    fn test_calculate_hand_value_single_ace() {
        let cards = vec![card(Rank::Ace, Suit::Hearts), card(Rank::Nine, Suit::Spades)];
        assert_eq!(calculate_hand_value(&cards), 20);

        let cards = vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(calculate_hand_value(&cards), 15); // Ace as 1
    }

    #[test]
    fn test_calculate_hand_value_multiple_aces() {
        let cards = vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
        ];
        assert_eq!(calculate_hand_value(&cards), 21);

        let cards = vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
        ];
        assert_eq!(calculate_hand_value(&cards), 12);
    }

    #[test]
    fn test_calculate_hand_value_empty() {
        assert_eq!(calculate_hand_value(&[]), 0);
    }

    #[test]
    fn test_whole_deck_saturates() {
        let deck = crate::Deck::ordered();
        assert_eq!(calculate_hand_value(deck.cards()), u8::MAX);
    }

    #[test]
    fn test_is_busted() {
        let cards = vec![
            card(Rank::King, Suit::Hearts),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
        ];
        assert!(is_busted(&cards));
        assert!(!is_busted(&cards[..2]));
    }

    #[test]
    fn test_is_soft_hand() {
        let cards = vec![card(Rank::Ace, Suit::Hearts), card(Rank::Six, Suit::Spades)];
        assert!(is_soft_hand(&cards));
    }

    #[test]
    fn test_not_soft_hand_hard_ace() {
        let cards = vec![
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Six, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
        ];
        assert!(!is_soft_hand(&cards));
    }

    #[test]
    fn test_not_soft_hand_no_ace() {
        let cards = vec![card(Rank::King, Suit::Hearts), card(Rank::Queen, Suit::Spades)];
        assert!(!is_soft_hand(&cards));
    }

    #[test]
    fn test_hand_struct_value_grows_with_cards() {
        let mut hand = Hand::new();
        hand.add_card(card(Rank::Ace, Suit::Hearts));
        hand.add_card(card(Rank::Six, Suit::Spades));
        assert_eq!(hand.value(), 17);
        assert!(hand.is_soft());

        hand.add_card(card(Rank::Ten, Suit::Clubs));
        assert_eq!(hand.value(), 17);
        assert!(!hand.is_soft());
        assert!(!hand.is_busted());
        assert_eq!(hand.len(), 3);
    }

    #[test]
    fn test_hand_display() {
        let hand = Hand::from_cards(vec![card(Rank::Ace, Suit::Hearts), card(Rank::Ten, Suit::Spades)]);
        assert_eq!(hand.to_string(), "A♥ 10♠");
    }

    #[test]
    fn test_outcome_tags() {
        assert_eq!(HandOutcome::Win.as_str(), "win");
        assert_eq!(HandOutcome::Loss.to_string(), "loss");
        assert_eq!(serde_json::to_string(&HandOutcome::Push).unwrap(), "\"push\"");
    }
}
