//! Score and level readout.

use crate::engine_state::voxels::game::{Game, GameStatus};

/// Snapshot of the values shown to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub level: u32,
    pub line_num: u32,
    pub status: GameStatus,
}

impl Hud {
    pub fn from_game(game: &Game) -> Self {
        Self {
            score: game.score(),
            level: game.level(),
            line_num: game.line_num(),
            status: game.status(),
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score {}", self.score)
    }

    pub fn level_text(&self) -> String {
        format!("Level {}, {}", self.level, self.line_num)
    }

    /// Single-line form used as the window title.
    pub fn title(&self) -> String {
        let suffix = match self.status {
            GameStatus::Ready => " (press Space)",
            GameStatus::Playing => "",
            GameStatus::Paused => " (paused)",
            GameStatus::Over => " (game over)",
        };
        format!("Bloktris | {} | {}{}", self.score_text(), self.level_text(), suffix)
    }

    /// Re-reads the game. Returns `true` if anything visible changed.
    pub fn refresh(&mut self, game: &Game) -> bool {
        let latest = Self::from_game(game);
        let changed = latest != *self;
        *self = latest;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud(score: u64, level: u32, line_num: u32, status: GameStatus) -> Hud {
        Hud {
            score,
            level,
            line_num,
            status,
        }
    }

    #[test]
    fn texts_follow_the_readout_format() {
        let hud = hud(2400, 2, 4, GameStatus::Playing);
        assert_eq!(hud.score_text(), "Score 2400");
        assert_eq!(hud.level_text(), "Level 2, 4");
        assert_eq!(hud.title(), "Bloktris | Score 2400 | Level 2, 4");
    }

    #[test]
    fn title_shows_status() {
        assert!(hud(0, 1, 0, GameStatus::Paused).title().ends_with("(paused)"));
        assert!(hud(0, 1, 0, GameStatus::Over).title().ends_with("(game over)"));
    }
}
