use blackjack::{Card, Snapshot, Tally};
use std::time::Duration;

fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(", ")
}

/// Both hands as the player sees them, followed by the table message.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = format!(
        "Player's hand: {} (Value: {})\n",
        join_cards(&snapshot.player_cards),
        snapshot.player_total
    );

    let visible = join_cards(snapshot.visible_dealer_cards());
    if snapshot.is_finished() {
        out.push_str(&format!("Dealer's hand: {visible} (Value: {})\n", snapshot.dealer_total));
    } else if snapshot.hidden_dealer_cards() == 0 {
        out.push_str(&format!("Dealer's hand: {visible}\n"));
    } else {
        let hidden = vec!["[Hidden]"; snapshot.hidden_dealer_cards()].join(", ");
        out.push_str(&format!("Dealer's hand: {visible}, {hidden}\n"));
    }

    out.push_str(&snapshot.message);
    out.push('\n');
    out
}

pub fn prompt(snapshot: &Snapshot) -> &'static str {
    if snapshot.is_finished() {
        "New game or quit? (n/q): "
    } else {
        "Hit or stand? (h/s/q): "
    }
}

pub fn invalid_input(snapshot: &Snapshot) -> &'static str {
    if snapshot.is_finished() {
        "Invalid input. Please enter 'n' or 'q'."
    } else {
        "Invalid input. Please enter 'h' or 's'."
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

pub fn tally_line(tally: &Tally, elapsed: Duration) -> String {
    format!(
        "Wins: {}  Losses: {}  Pushes: {}  Session time: {}",
        tally.wins,
        tally.losses,
        tally.pushes,
        format_elapsed(elapsed)
    )
}
