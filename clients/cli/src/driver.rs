use crate::render;
use blackjack::{Action, MemoryHistory, Snapshot, Table};
use std::io::{BufRead, Write};
use std::time::Instant;

pub type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Action),
    Quit,
}

/// Only the moves that make sense right now: hit/stand mid-hand, a new game
/// once the hand is over. Quit is always accepted.
fn parse_command(line: &str, finished: bool) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Some(Command::Quit);
    }
    match line.parse::<Action>() {
        Ok(Action::NewGame) if finished => Some(Command::Play(Action::NewGame)),
        Ok(action @ (Action::Hit | Action::Stand)) if !finished => Some(Command::Play(action)),
        _ => None,
    }
}

fn show<W: Write>(out: &mut W, snapshot: &Snapshot, output: Output) -> Result<(), BoxErr> {
    match output {
        Output::Text => writeln!(out, "{}", render::render_snapshot(snapshot))?,
        Output::Json => writeln!(out, "{}", serde_json::to_string(snapshot)?)?,
    }
    Ok(())
}

/// Read moves line by line until quit or end of input, then print the tally.
pub fn play<R: BufRead, W: Write>(
    table: &Table<MemoryHistory>,
    identity: &str,
    output: Output,
    input: R,
    out: &mut W,
) -> Result<(), BoxErr> {
    let started = Instant::now();
    let mut snapshot = table.view(identity)?;
    show(out, &snapshot, output)?;

    let mut lines = input.lines();
    loop {
        if output == Output::Text {
            write!(out, "{}", render::prompt(&snapshot))?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line, snapshot.is_finished()) {
            Some(Command::Quit) => break,
            Some(Command::Play(action)) => {
                log::debug!("{identity} plays {action}");
                snapshot = table.act(identity, action)?;
                show(out, &snapshot, output)?;
            }
            None => writeln!(out, "{}", render::invalid_input(&snapshot))?,
        }
    }

    let tally = table.sink().tally(identity);
    let elapsed = started.elapsed();
    match output {
        Output::Text => writeln!(out, "\n{}", render::tally_line(&tally, elapsed))?,
        Output::Json => writeln!(
            out,
            "{}",
            serde_json::json!({
                "wins": tally.wins,
                "losses": tally.losses,
                "pushes": tally.pushes,
                "session_time": render::format_elapsed(elapsed),
            })
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{SessionStore, StoreConfig};

    fn table() -> Table<MemoryHistory> {
        let store = SessionStore::new(StoreConfig {
            seed: Some(2024),
            ..StoreConfig::default()
        });
        Table::new(store, MemoryHistory::new())
    }

    fn run(table: &Table<MemoryHistory>, input: &str, output: Output) -> String {
        let mut out = Vec::new();
        play(table, "player", output, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command_by_phase() {
        assert_eq!(parse_command("h", false), Some(Command::Play(Action::Hit)));
        assert_eq!(parse_command("S\n", false), Some(Command::Play(Action::Stand)));
        assert_eq!(parse_command("n", false), None);
        assert_eq!(parse_command("n", true), Some(Command::Play(Action::NewGame)));
        assert_eq!(parse_command("h", true), None);
        assert_eq!(parse_command("quit", true), Some(Command::Quit));
        assert_eq!(parse_command("", false), None);
    }

    #[test]
    fn test_stand_then_quit() {
        let table = table();
        let text = run(&table, "s\nq\n", Output::Text);

        assert!(text.contains("Game started. Hit or stand?"));
        assert!(text.contains("[Hidden]"));
        assert!(text.contains("New game or quit? (n/q): "));
        assert!(text.contains("Session time: 00:00:0"));
        assert_eq!(table.sink().tally("player").hands(), 1);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let table = table();
        let text = run(&table, "x\ns\nh\nn\nq\n", Output::Text);

        assert!(text.contains("Invalid input. Please enter 'h' or 's'."));
        assert!(text.contains("Invalid input. Please enter 'n' or 'q'."));
        assert_eq!(table.sink().actions("player"), vec![Action::Stand, Action::NewGame]);
        assert_eq!(table.sink().tally("player").hands(), 1);
    }

    #[test]
    fn test_end_of_input_still_prints_tally() {
        let table = table();
        let text = run(&table, "", Output::Text);
        assert!(text.contains("Wins: 0  Losses: 0  Pushes: 0"));
    }

    #[test]
    fn test_json_output_is_line_delimited() {
        let table = table();
        let json = run(&table, "s\n", Output::Json);
        let lines: Vec<&str> = json.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: Snapshot = serde_json::from_str(lines[0]).unwrap();
        assert!(!first.is_finished());
        let second: Snapshot = serde_json::from_str(lines[1]).unwrap();
        assert!(second.is_finished());

        let tally: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        let hands = tally["wins"].as_u64().unwrap()
            + tally["losses"].as_u64().unwrap()
            + tally["pushes"].as_u64().unwrap();
        assert_eq!(hands, 1);
    }
}
