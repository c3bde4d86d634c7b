/// Per-level difficulty table and formation construction.

use crate::entities::{Invader, Variant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelConfig {
    pub rows: usize,
    pub cols: usize,
    /// Horizontal step per tick.
    pub speed: f32,
    pub col_pitch: f32,
    pub row_pitch: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

/// Highest level with its own row in the table.
pub const LAST_DEFINED_LEVEL: u32 = 3;

// ── Difficulty table ─────────────────────────────────────────────────────────

/// Look up the grid for `level`.  Levels past the table keep level 3's
/// difficulty; level 0 is treated as level 1.
pub fn level_config(level: u32) -> LevelConfig {
    let (rows, cols, speed) = match level {
        0 | 1 => (5, 10, 1.0),
        2 => (6, 11, 1.5),
        _ => (7, 12, 2.0),
    };
    LevelConfig {
        rows,
        cols,
        speed,
        col_pitch: 55.0,
        row_pitch: 45.0,
        origin_x: 30.0,
        origin_y: 30.0,
    }
}

/// The simple variant never leaves the first level's grid.
pub fn config_for(variant: Variant, level: u32) -> LevelConfig {
    match variant {
        Variant::Simple => level_config(1),
        Variant::Leveled => level_config(level),
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh, fully alive grid in row-major order.
pub fn create_invaders(config: &LevelConfig) -> Vec<Invader> {
    let mut invaders = Vec::with_capacity(config.rows * config.cols);
    for row in 0..config.rows {
        for col in 0..config.cols {
            invaders.push(Invader::new(
                col as f32 * config.col_pitch + config.origin_x,
                row as f32 * config.row_pitch + config.origin_y,
            ));
        }
    }
    invaders
}

