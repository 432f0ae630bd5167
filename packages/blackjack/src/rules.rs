//! Fixed house rules: single deck, no betting, dealer stands on all 17s.

use crate::{calculate_hand_value, Card, HandOutcome};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Dealer draws while below this total. Soft and hard 17 are treated alike.
pub const DEALER_STANDS_ON: u8 = 17;

/// Cards dealt to each party when a hand starts.
pub const INITIAL_HAND_SIZE: usize = 2;

pub fn dealer_should_hit(dealer_cards: &[Card]) -> bool {
    calculate_hand_value(dealer_cards) < DEALER_STANDS_ON
}

/// Compare final totals once the dealer has finished drawing.
pub fn resolve(player_total: u8, dealer_total: u8) -> HandOutcome {
    if dealer_total > BLACKJACK || player_total > dealer_total {
        HandOutcome::Win
    } else if player_total < dealer_total {
        HandOutcome::Loss
    } else {
        HandOutcome::Push
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn test_resolve_table() {
        assert_eq!(resolve(18, 22), HandOutcome::Win); // dealer bust
        assert_eq!(resolve(20, 18), HandOutcome::Win);
        assert_eq!(resolve(18, 20), HandOutcome::Loss);
        assert_eq!(resolve(19, 19), HandOutcome::Push);
    }

    #[test]
    fn test_dealer_should_hit() {
        let mut cards = vec![Card::new(Rank::Ten, Suit::Hearts), Card::new(Rank::Six, Suit::Spades)];
        assert!(dealer_should_hit(&cards)); // 16

        cards.push(Card::new(Rank::Five, Suit::Clubs));
        assert!(!dealer_should_hit(&cards)); // 21
    }

    #[test]
    fn test_dealer_stands_on_hard_17() {
        let cards = vec![Card::new(Rank::Ten, Suit::Hearts), Card::new(Rank::Seven, Suit::Spades)];
        assert!(!dealer_should_hit(&cards));
    }

    #[test]
    fn test_dealer_stands_on_soft_17() {
        let cards = vec![Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Six, Suit::Spades)];
        assert!(!dealer_should_hit(&cards));
    }
}
