//! Loading configuration files from disk and feeding the roster through the
//! report and repl handlers.

use std::io::Write;

use tempfile::NamedTempFile;
use tennis_cli::config::{load_config, DEFAULT_PRECISION};
use tennis_cli::repl::run_repl;
use tennis_cli::report::{run_report, ReportArgs};
use tennis_cli::roster::RosterProvider;
use tennis_core::StatsProvider;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const ROSTER_YAML: &str = "\
precision: 2
players:
  - name: Alcaraz
    service_win_p: 0.65
    return_win_p: 0.38
  - name: Swiatek
    service_win_p: 0.62
    return_win_p: 0.40
";

#[test]
fn test_load_roster_file() {
    let file = write_config(ROSTER_YAML);
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.precision, 2);
    let roster = RosterProvider::new(config.players);
    assert_eq!(roster.names(), vec!["Alcaraz", "Swiatek"]);
    assert!(roster.lookup("sabalenka").is_err());
}

#[test]
fn test_precision_only_keeps_builtin_roster() {
    let file = write_config("precision: 4\n");
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.precision, 4);
    assert_eq!(config.players.len(), 2);
}

#[test]
fn test_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"), "{err}");
}

#[test]
fn test_invalid_file_is_rejected() {
    let file = write_config(
        "players:\n  - name: Bad\n    service_win_p: -0.2\n    return_win_p: 0.5\n",
    );
    let err = load_config(Some(file.path())).unwrap_err();
    assert!(format!("{err:#}").contains("-0.2"), "{err:#}");
}

#[test]
fn test_report_uses_configured_precision() {
    let file = write_config(ROSTER_YAML);
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.precision, DEFAULT_PRECISION - 1);
    let roster = RosterProvider::new(config.players.clone());
    let args = ReportArgs {
        player: "alcaraz".into(),
        serve: None,
        return_p: None,
        json: false,
    };
    let mut out = Vec::new();
    run_report(&args, &config, &roster, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Alcaraz\n"));
    // 0.657417 at two places.
    assert!(text.contains("match win                0.66\n"), "{text}");
}

#[test]
fn test_repl_over_configured_roster() {
    let file = write_config(ROSTER_YAML);
    let config = load_config(Some(file.path())).unwrap();
    let roster = RosterProvider::new(config.players.clone());
    let mut out = Vec::new();
    run_repl(&roster, config.precision, "SWIATEK\nquit\n".as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    // 0.607079 at two places.
    assert!(text.contains("match win                0.61\n"), "{text}");
}
