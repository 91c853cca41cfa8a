//! Reference players run through every level, checked against values
//! computed independently to six decimal places.

use tennis_core::Player;
use tennis_model::{GameModel, MatchModel, PlayerReport, SetModel};

struct Fixture {
    name: &'static str,
    serve: f64,
    ret: f64,
    hold: f64,
    brk: f64,
    set: f64,
    tennis_match: f64,
}

#[rustfmt::skip]
const FIXTURES: &[Fixture] = &[
    Fixture { name: "Sabalenka", serve: 0.599, ret: 0.448, hold: 0.733640, brk: 0.372081, set: 0.666178, tennis_match: 0.740088 },
    Fixture { name: "Kyrgios", serve: 0.69, ret: 0.16, hold: 0.888434, brk: 0.009182, set: 0.062622, tennis_match: 0.011273 },
    Fixture { name: "Even", serve: 0.5, ret: 0.5, hold: 0.5, brk: 0.5, set: 0.5, tennis_match: 0.5 },
    Fixture { name: "Mirror", serve: 0.6, ret: 0.4, hold: 0.735729, brk: 0.264271, set: 0.5, tennis_match: 0.5 },
    Fixture { name: "Alcaraz", serve: 0.65, ret: 0.38, hold: 0.829645, brk: 0.224137, set: 0.606558, tennis_match: 0.657417 },
    Fixture { name: "Swiatek", serve: 0.62, ret: 0.40, hold: 0.775863, brk: 0.264271, set: 0.571881, tennis_match: 0.607079 },
    Fixture { name: "Gauff", serve: 0.64, ret: 0.40, hold: 0.812615, brk: 0.264271, set: 0.641017, tennis_match: 0.705916 },
];

const TOLERANCE: f64 = 1e-5;

fn assert_close(what: &str, name: &str, got: f64, want: f64) {
    assert!(
        (got - want).abs() < TOLERANCE,
        "{name} {what}: got {got:.6}, want {want:.6}"
    );
}

#[test]
fn test_levels_match_reference_values() {
    for f in FIXTURES {
        let player = Player::new(f.name, f.serve, f.ret).unwrap();

        let game = GameModel::new(&player).unwrap();
        assert_close("hold", f.name, game.server_game_win_p().unwrap().value(), f.hold);
        assert_close("break", f.name, game.returner_game_win_p().unwrap().value(), f.brk);

        let set = SetModel::new(&player).unwrap();
        assert_close("set", f.name, set.set_win_p().unwrap().value(), f.set);

        let m = MatchModel::new(&player).unwrap();
        assert_close("match", f.name, m.match_win_p().unwrap().value(), f.tennis_match);
    }
}

#[test]
fn test_report_agrees_with_levels() {
    for f in FIXTURES {
        let player = Player::new(f.name, f.serve, f.ret).unwrap();
        let report = PlayerReport::compute(&player).unwrap();
        assert_eq!(report.name, f.name);
        assert_close("report set", f.name, report.set_win_p.value(), f.set);
        assert_close("report match", f.name, report.match_win_p.value(), f.tennis_match);
    }
}

#[test]
fn test_set_and_match_move_together() {
    // Better than even in a set means better still over three sets.
    for f in FIXTURES {
        let player = Player::new(f.name, f.serve, f.ret).unwrap();
        let report = PlayerReport::compute(&player).unwrap();
        let (set, m) = (report.set_win_p.value(), report.match_win_p.value());
        if (set - 0.5).abs() < 1e-9 {
            assert_close("match", f.name, m, 0.5);
        } else if set > 0.5 {
            assert!(m > set, "{}", f.name);
        } else {
            assert!(m < set, "{}", f.name);
        }
    }
}

#[test]
fn test_expected_lengths_at_even_odds() {
    let player = Player::new("Even", 0.5, 0.5).unwrap();
    let report = PlayerReport::compute(&player).unwrap();
    assert_close("points", "Even", report.expected_points_serving, 6.75);
    assert_close("points", "Even", report.expected_points_returning, 6.75);
    assert_close("games", "Even", report.expected_games, 10.03125);
    assert_close("sets", "Even", report.expected_sets, 2.5);
}
