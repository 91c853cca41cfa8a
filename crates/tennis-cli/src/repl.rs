//! # Interactive Loop
//!
//! `tennis repl` asks for a player name, looks it up, and prints the
//! report. Unknown names fall back to prompting for the two point
//! probabilities. `quit`, `exit` or end of input stops the loop.
//!
//! Input and output are generic so the loop can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use tennis_core::{Player, Probability, ProviderError, StatsProvider};
use tennis_model::PlayerReport;

use crate::render::render_report;

const PROMPT: &str = "player> ";

/// Run the loop until `quit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    provider: &dyn StatsProvider,
    precision: usize,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };
        match line.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        let player = match provider.lookup(&line) {
            Ok(player) => player,
            Err(ProviderError::NotFound(name)) => {
                writeln!(out, "{name} is not in the {}", provider.provider_name())?;
                let Some(serve) =
                    prompt_probability(&mut input, out, "service_win_p", "serve point win")?
                else {
                    break;
                };
                let Some(return_p) =
                    prompt_probability(&mut input, out, "return_win_p", "return point win")?
                else {
                    break;
                };
                Player::from_probabilities(name, serve, return_p)
            }
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        match PlayerReport::compute(&player) {
            Ok(report) => write!(out, "{}", render_report(&report, precision))?,
            Err(e) => {
                tracing::warn!(player = player.name(), error = %e, "report failed");
                writeln!(out, "error: {e}")?;
            }
        }
    }
    Ok(())
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until a valid probability arrives. `None` at end of input.
fn prompt_probability<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    field: &'static str,
    label: &str,
) -> Result<Option<Probability>> {
    loop {
        write!(out, "{label} probability: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(None);
        };
        let parsed = line
            .parse::<f64>()
            .map_err(|e| format!("{line:?} is not a number: {e}"))
            .and_then(|v| Probability::new(field, v).map_err(|e| e.to_string()));
        match parsed {
            Ok(p) => return Ok(Some(p)),
            Err(msg) => writeln!(out, "error: {msg}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_roster;
    use crate::roster::RosterProvider;

    fn session(input: &str) -> String {
        let provider = RosterProvider::new(builtin_roster());
        let mut out = Vec::new();
        run_repl(&provider, 3, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_roster_lookup_then_quit() {
        let text = session("sabalenka\nquit\nkyrgios\n");
        assert!(text.contains("\nSabalenka\n") || text.starts_with("player> Sabalenka\n"));
        assert!(text.contains("match win"));
        assert!(!text.contains("Kyrgios"), "stopped at quit: {text}");
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_manual_fallback() {
        let text = session("Federer\n0.65\n0.38\n");
        assert!(text.contains("Federer is not in the roster\n"));
        assert!(text.contains("serve point win probability: "));
        assert!(text.contains("match win                0.657"), "{text}");
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let text = session("Nobody\nfast\n1.5\n0.5\n0.5\nexit\n");
        assert!(text.contains("error: \"fast\" is not a number"), "{text}");
        assert!(text.contains("error: service_win_p must lie in [0, 1], got 1.5"));
        assert!(text.contains("set win                  0.500"), "{text}");
    }

    #[test]
    fn test_end_of_input_during_manual_entry() {
        let text = session("Nobody\n0.6\n");
        assert!(text.ends_with("return point win probability: \n"));
    }

    #[test]
    fn test_degenerate_player_reports_error_and_continues() {
        let text = session("Flawless\n1\n0\nquit\n");
        assert!(
            text.contains("error: degenerate chain: state 0-0 never reaches an absorbing state\n"),
            "{text}"
        );
        assert!(!text.contains("match win"), "{text}");
        assert_eq!(text.matches(PROMPT).count(), 2, "{text}");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = session("\n\nquit\n");
        assert_eq!(text.matches(PROMPT).count(), 3);
    }
}
