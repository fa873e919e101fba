//! # Scoring
//!
//! Score, level and line progress derived from the number of layers cleared.

/// Points per number of layers cleared in one tick, before the level multiplier.
pub const LINE_AWARDS: [u64; 5] = [0, 40, 100, 300, 1200];

/// Layers needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Running totals for one game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreState {
    score: u64,
    total_lines_cleared: u32,
}

impl ScoreState {
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn total_lines_cleared(&self) -> u32 {
        self.total_lines_cleared
    }

    pub fn level(&self) -> u32 {
        self.total_lines_cleared / LINES_PER_LEVEL
    }

    /// Progress within the current level.
    pub fn line_num(&self) -> u32 {
        self.total_lines_cleared % LINES_PER_LEVEL
    }

    /// Points for clearing `cleared` layers at `level`.
    ///
    /// Anything other than one to four layers awards nothing.
    pub fn award_for(cleared: u32, level: u32) -> u64 {
        let base = LINE_AWARDS.get(cleared as usize).copied().unwrap_or(0);
        base * (level as u64 + 1)
    }

    /// Books one tick's clears and returns the points awarded.
    ///
    /// The multiplier uses the level reached before these layers are counted.
    pub fn record_clear(&mut self, cleared: u32) -> u64 {
        let awarded = Self::award_for(cleared, self.level());
        self.score += awarded;
        self.total_lines_cleared += cleared;
        awarded
    }
}
