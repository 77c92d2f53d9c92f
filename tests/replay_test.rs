//! End-to-end scenarios driven through intents and the text renderer.

use tictactoe_history::{Intent, render_text};
use tictactoe_rules::{Position, SortOrder};

fn parse(script: &[&str]) -> Vec<Intent> {
    script.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn test_restart_after_win() {
    let intents = parse(&["play:0", "play:4", "play:1", "play:7", "play:2", "restart"]);
    let state = Intent::replay(SortOrder::Ascending, &intents);
    let text = render_text(&state);

    assert!(text.starts_with("Next player: X\n"));
    assert!(text.ends_with("1. [Go to game start]\n"));
    assert!(!text.contains("2."));
}

#[test]
fn test_sort_reverses_listing_only() {
    let intents = parse(&["play:0", "play:4", "play:8"]);
    let ascending = Intent::replay(SortOrder::Ascending, &intents);
    let descending = Intent::ToggleSort.apply(&ascending);

    assert_eq!(ascending.history(), descending.history());

    let text = render_text(&descending);
    assert!(text.contains("[Sort by desc]"));
    assert!(text.contains(
        "1. You are at move (3, 3)\n2. [Go to move (2, 2)]\n3. [Go to move (1, 1)]\n4. [Go to game start]\n"
    ));
}

#[test]
fn test_post_win_plays_ignored() {
    let intents = parse(&["play:0", "play:4", "play:1", "play:7", "play:2", "play:8", "play:5"]);
    let state = Intent::replay(SortOrder::Ascending, &intents);
    assert_eq!(state.history().len(), 6);
    assert_eq!(state.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_back_shows_earlier_board() {
    let intents = parse(&["play:0", "play:4", "jump:1"]);
    let state = Intent::replay(SortOrder::Ascending, &intents);
    let text = render_text(&state);

    assert!(text.starts_with("Next player: O\n"));
    assert!(state.current_board().is_empty(Position::Center));
    // The tip stays a static label even while viewing an earlier move.
    assert!(text.contains("3. You are at move (2, 2)"));
}

#[test]
fn test_draw_status() {
    let intents = parse(&[
        "play:0", "play:1", "play:2", "play:4", "play:3", "play:5", "play:7", "play:6", "play:8",
    ]);
    let state = Intent::replay(SortOrder::Ascending, &intents);
    assert!(render_text(&state).starts_with("It's a draw.\n"));
}

#[test]
fn test_json_output_shape() {
    let intents = parse(&["play:4", "play:0", "jump:1"]);
    let state = Intent::replay(SortOrder::Descending, &intents);
    let value = serde_json::to_value(&state).unwrap();

    assert_eq!(value["current_move"], 1);
    assert_eq!(value["order"], "descending");
    let entries = value["history"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[0]["played"].is_null());
    assert_eq!(entries[1]["played"], "Center");
    assert_eq!(entries[2]["played"], "TopLeft");
}
