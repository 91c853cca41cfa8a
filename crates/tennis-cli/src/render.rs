//! # Plain-Text Rendering
//!
//! Fixed-width tables for transition matrices and player reports. Zero
//! matrix entries print as `.` so the sparse structure stands out.
//!
//! With colour enabled, rows alternate between two ANSI backgrounds and
//! non-zero entries are red below one half, green above, and yellow at
//! exactly one half. Padding is applied before the escape codes so the
//! columns stay aligned either way.

use tennis_chain::{ChainState, TransitionMatrix};
use tennis_model::PlayerReport;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";

/// Background and text colour for row `index`.
fn row_style(index: usize) -> &'static str {
    if index % 2 == 0 {
        "\x1b[100m\x1b[30m"
    } else {
        "\x1b[40m\x1b[37m"
    }
}

fn value_colour(value: f64) -> &'static str {
    if value < 0.5 {
        RED
    } else if value > 0.5 {
        GREEN
    } else {
        YELLOW
    }
}

/// Render `matrix` with its state labels along both axes.
pub fn render_matrix<S: ChainState, const N: usize>(
    matrix: &TransitionMatrix<S, N>,
    precision: usize,
    color: bool,
) -> String {
    let labels = matrix.labels();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let cell_width = label_width.max(precision + 2);

    let mut out = format!("{:label_width$}", "");
    for label in &labels {
        out.push_str(&format!(" {label:>cell_width$}"));
    }
    out.push('\n');

    for (row, row_label) in labels.iter().enumerate() {
        let style = row_style(row);
        if color {
            out.push_str(style);
        }
        out.push_str(&format!("{row_label:<label_width$}"));
        for col in 0..N {
            let value = matrix.entry(row, col).unwrap_or(0.0);
            if value == 0.0 {
                out.push_str(&format!(" {:>cell_width$}", "."));
            } else if color {
                out.push_str(&format!(
                    " {}{value:>cell_width$.precision$}{style}",
                    value_colour(value)
                ));
            } else {
                out.push_str(&format!(" {value:>cell_width$.precision$}"));
            }
        }
        if color {
            out.push_str(RESET);
        }
        out.push('\n');
    }
    out
}

/// Render `label value` pairs with the values aligned.
pub fn render_rows(rows: &[(&str, f64)], precision: usize) -> String {
    let width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("  {label:<width$}  {value:.precision$}\n"))
        .collect()
}

/// Render a player report under the player's name.
pub fn render_report(report: &PlayerReport, precision: usize) -> String {
    let rows = [
        ("service point win", report.service_win_p.value()),
        ("return point win", report.return_win_p.value()),
        ("hold serve", report.server_game_win_p.value()),
        ("break serve", report.returner_game_win_p.value()),
        ("set win", report.set_win_p.value()),
        ("match win", report.match_win_p.value()),
        ("points per service game", report.expected_points_serving),
        ("points per return game", report.expected_points_returning),
        ("games per set", report.expected_games),
        ("sets per match", report.expected_sets),
    ];
    format!("{}\n{}", report.name, render_rows(&rows, precision))
}
