#![cfg(feature = "std")]

//! Score tally that outlives individual games, with JSON persistence.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    common::{GameResult, Player},
    config::MAX_RECENT_RESULTS,
};

/// Win/draw counters plus the most recent finished games (newest first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    #[serde(default)]
    pub recent: VecDeque<GameResult>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game; counters saturate at `u32::MAX`.
    /// Returns `false` for `InProgress`, which is not recorded.
    pub fn record(&mut self, result: GameResult) -> bool {
        match result {
            GameResult::InProgress => return false,
            GameResult::Win(Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            GameResult::Win(Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            GameResult::Draw => self.draws = self.draws.saturating_add(1),
        }
        self.recent.push_front(result);
        self.recent.truncate(MAX_RECENT_RESULTS);
        true
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Read a scoreboard from `path`. A missing file yields an empty tally.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no score file at {}, starting fresh", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scores from {}", path.display()))?;
        let mut board: Scoreboard = serde_json::from_str(&text)
            .with_context(|| format!("parsing scores in {}", path.display()))?;
        board.recent.truncate(MAX_RECENT_RESULTS);
        Ok(board)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing scores to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_and_bounds_recent() {
        let mut scores = Scoreboard::new();
        assert!(!scores.record(GameResult::InProgress));
        for _ in 0..4 {
            scores.record(GameResult::Win(Player::X));
        }
        scores.record(GameResult::Draw);
        scores.record(GameResult::Win(Player::O));
        assert_eq!(scores.x_wins, 4);
        assert_eq!(scores.o_wins, 1);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.games_played(), 6);
        assert_eq!(scores.recent.len(), MAX_RECENT_RESULTS);
        assert_eq!(scores.recent[0], GameResult::Win(Player::O));
        assert_eq!(scores.recent[1], GameResult::Draw);
    }

    #[test]
    fn json_uses_fixed_keys() {
        let mut scores = Scoreboard::new();
        scores.record(GameResult::Draw);
        let value = serde_json::to_value(&scores).unwrap();
        assert_eq!(value["draws"], 1);
        assert_eq!(value["x_wins"], 0);
        assert_eq!(value["o_wins"], 0);
        assert!(value["recent"].is_array());
    }

    #[test]
    fn missing_recent_field_defaults_to_empty() {
        let scores: Scoreboard =
            serde_json::from_str(r#"{"x_wins":2,"o_wins":1,"draws":0}"#).unwrap();
        assert_eq!(scores.wins(Player::X), 2);
        assert!(scores.recent.is_empty());
    }

    #[test]
    fn counters_saturate_at_max() {
        let mut scores: Scoreboard =
            serde_json::from_str(r#"{"x_wins":4294967295,"o_wins":4294967295,"draws":3}"#).unwrap();
        assert!(scores.record(GameResult::Win(Player::X)));
        assert!(scores.record(GameResult::Win(Player::O)));
        scores.record(GameResult::Draw);
        assert_eq!(scores.x_wins, u32::MAX);
        assert_eq!(scores.o_wins, u32::MAX);
        assert_eq!(scores.draws, 4);
        assert_eq!(scores.games_played(), u32::MAX);
        assert_eq!(scores.recent.len(), 3);
    }
}
