//! Tests for the headless replay report.

use rewind::{AppConfig, Participant, render_json, render_text, replay};

fn roster() -> AppConfig {
    AppConfig::new(
        Participant::new("Alice".to_string(), Some("pk-alice".to_string())),
        Participant::new("Bob".to_string(), None),
    )
}

#[test]
fn test_text_report_for_won_game() {
    let game = replay(&[0, 4, 1, 3, 2], None);
    let report = render_text(&game, &roster());

    assert!(report.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9"));
    assert!(report.contains("Winner: X (Alice)"));
    assert!(report.contains("Winning line: 0, 1, 2"));
    assert!(report.contains("  Go to game start.\n"));
    assert!(report.contains("> Go to move #5  (X -> Top-right)\n"));
    assert!(report.contains("X: Alice [pk-alice]"));
    assert!(report.contains("O: Bob [(no public id)]"));
}

#[test]
fn test_text_report_after_jump() {
    let game = replay(&[0, 4, 1, 3, 2], Some(2));
    let report = render_text(&game, &roster());

    assert!(report.starts_with("X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"));
    assert!(report.contains("Next Player: X (Alice)"));
    assert!(!report.contains("Winning line"));
    assert!(report.contains("> Go to move #2  (O -> Center)\n"));
    assert!(report.contains("  Go to move #5  (X -> Top-right)\n"));
}

#[test]
fn test_json_report() {
    let game = replay(&[4, 0], None);
    let json = render_json(&game, &roster()).expect("Serialize failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("Valid JSON");

    assert_eq!(value["status"], "Next Player: X");
    assert_eq!(value["view"]["move_number"], 2);
    assert!(value["view"]["win"].is_null());
    assert_eq!(value["history"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["history"][2]["current"], true);
    assert_eq!(value["participants"]["x"]["name"], "Alice");
}

#[test]
fn test_rejected_moves_are_skipped() {
    let game = replay(&[4, 4, 11, 0], None);
    assert_eq!(game.history().len(), 3);
}
