//! High-score table and its text file.
//!
//! File layout: the first line holds the number of records, followed by one
//! line per record with the name left-justified in a ten character column
//! and the score immediately after it.

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::config::{MAX_HIGH_SCORES, NAME_WIDTH};

const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub name: String,
    pub value: i32,
}

/// Best scores, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<Score>,
}

fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .chars()
        .take(NAME_WIDTH)
        .collect();
    let cleaned = cleaned.trim_end().to_string();
    if cleaned.is_empty() {
        ANONYMOUS.to_string()
    } else {
        cleaned
    }
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Whether `value` would earn a place in the table.
    pub fn qualifies(&self, value: i32) -> bool {
        self.scores.len() < MAX_HIGH_SCORES
            || self.scores.last().is_some_and(|s| value > s.value)
    }

    /// Add a score, keeping the table sorted and bounded. Returns the
    /// 0-based rank, or `None` if the score did not make the table.
    pub fn insert(&mut self, name: &str, value: i32) -> Option<usize> {
        if !self.qualifies(value) {
            return None;
        }
        let rank = self
            .scores
            .iter()
            .position(|s| s.value < value)
            .unwrap_or(self.scores.len());
        self.scores.insert(
            rank,
            Score {
                name: normalize_name(name),
                value,
            },
        );
        self.scores.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Parse the file format.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut lines = text.lines();
        let count: usize = match lines.next() {
            Some(line) => line
                .trim()
                .parse()
                .with_context(|| format!("invalid record count {:?}", line))?,
            None => return Ok(Self::new()),
        };

        let mut scores = Vec::with_capacity(count);
        for i in 0..count {
            let Some(line) = lines.next() else {
                bail!("expected {} records, found {}", count, i);
            };
            let name: String = line.chars().take(NAME_WIDTH).collect();
            let value: String = line.chars().skip(NAME_WIDTH).collect();
            let value = value
                .trim()
                .parse()
                .with_context(|| format!("invalid score on record {}: {:?}", i + 1, line))?;
            scores.push(Score {
                name: normalize_name(&name),
                value,
            });
        }
        scores.sort_by(|a, b| b.value.cmp(&a.value));
        scores.truncate(MAX_HIGH_SCORES);
        Ok(Self { scores })
    }

    /// Render in the file format.
    pub fn to_file_format(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.scores.len());
        for s in &self.scores {
            let _ = writeln!(out, "{:<width$}{}", s.name, s.value, width = NAME_WIDTH);
        }
        out
    }

    /// Load a table; a missing file is an empty table.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text)
                .with_context(|| format!("malformed high-score file {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_file_format())
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Table as shown to the player.
    pub fn render(&self) -> String {
        let mut out = String::from("   High Scores   \n");
        for (i, s) in self.scores.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>2}:   {:<width$}   {}",
                i + 1,
                s.name,
                s.value,
                width = NAME_WIDTH
            );
        }
        out
    }
}
