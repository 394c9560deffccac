#![cfg(feature = "std")]

use std::fs;
use std::path::PathBuf;

use battleships::{HighScores, Score, MAX_HIGH_SCORES};

fn scratch_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "battleships-{}-{}.txt",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_parse_and_render_file_format() {
    let text = "3\nBob       80\nAlice     120\nAnonymous -5\n";
    let table = HighScores::parse(text).unwrap();
    let entries: Vec<_> = table
        .scores()
        .iter()
        .map(|s| (s.name.as_str(), s.value))
        .collect();
    assert_eq!(entries, vec![("Alice", 120), ("Bob", 80), ("Anonymous", -5)]);
    assert_eq!(
        table.to_file_format(),
        "3\nAlice     120\nBob       80\nAnonymous -5\n"
    );
}

#[test]
fn test_full_width_names() {
    let table = HighScores::parse("1\nBartholome120\n").unwrap();
    assert_eq!(table.scores()[0].name, "Bartholome");
    assert_eq!(table.scores()[0].value, 120);
}

#[test]
fn test_parse_rejects_malformed_files() {
    assert!(HighScores::parse("many\n").is_err());
    assert!(HighScores::parse("2\nAlice     10\n").is_err());
    assert!(HighScores::parse("1\nAlice     ten\n").is_err());
    assert!(HighScores::parse("").unwrap().scores().is_empty());
}

#[test]
fn test_insert_keeps_table_sorted_and_bounded() {
    let mut table = HighScores::new();
    for i in 1..=MAX_HIGH_SCORES as i32 {
        assert!(table.qualifies(i * 10));
        table.insert("Player", i * 10).unwrap();
    }
    assert_eq!(table.scores().len(), MAX_HIGH_SCORES);
    assert_eq!(table.scores()[0].value, 100);

    assert!(!table.qualifies(10));
    assert_eq!(table.insert("Late", 5), None);
    assert_eq!(table.insert("Mid", 55), Some(5));
    assert_eq!(table.scores().len(), MAX_HIGH_SCORES);
    assert_eq!(table.scores()[5].name, "Mid");
    assert_eq!(table.scores().last().unwrap().value, 20);

    // ties rank below existing entries
    assert_eq!(table.insert("Tie", 100), Some(1));
}

#[test]
fn test_names_are_trimmed_and_truncated() {
    let mut table = HighScores::new();
    table.insert("  Bartholomew the Great ", 3);
    table.insert("   ", 2);
    table.insert("Al\tice", 1);
    let names: Vec<_> = table.scores().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bartholome", "Anonymous", "Alice"]);
}

#[test]
fn test_render_lists_ranks() {
    let mut table = HighScores::new();
    table.insert("Alice", 120);
    table.insert("Bob", 80);
    let rendered = table.render();
    assert!(rendered.contains("High Scores"));
    assert!(rendered.contains(" 1:   Alice        120"));
    assert!(rendered.contains(" 2:   Bob          80"));
}

#[test]
fn test_save_and_load() {
    let path = scratch_file("scores");
    assert!(HighScores::load(&path).unwrap().scores().is_empty());

    let mut table = HighScores::new();
    table.insert("Alice", 120);
    table.insert("Bob", -3);
    table.save(&path).unwrap();
    assert_eq!(HighScores::load(&path).unwrap(), table);

    fs::write(&path, "oops").unwrap();
    assert!(HighScores::load(&path).is_err());
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_score_json_round_trip() {
    let mut table = HighScores::new();
    table.insert("Alice", 120);
    table.insert("  ", -4);

    let json = serde_json::to_string(table.scores()).unwrap();
    assert_eq!(
        json,
        r#"[{"name":"Alice","value":120},{"name":"Anonymous","value":-4}]"#
    );
    let back: Vec<Score> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table.scores());
}
