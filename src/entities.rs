/// Entity records and the master game state.  Plain data, no rules.

use crate::constants::{
    BULLET_HEIGHT, BULLET_WIDTH, INVADER_HEIGHT, INVADER_WIDTH, PLAYER_HEIGHT, PLAYER_SPEED,
    PLAYER_START_X, PLAYER_WIDTH, PLAYER_Y,
};
use crate::geometry::{Bounds, Rect};

/// Which edition of the rules is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// One level; clearing the grid ends the game as a win.
    Simple,
    /// Endless levels with a level-complete pause between them.
    Leveled,
}

/// Why a game ended.  Both reasons share the single `GameOver` state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// A live invader reached the player's row.
    Overrun,
    /// Every invader was destroyed (simple variant only).
    Cleared,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Playing,
    LevelComplete,
    GameOver(EndReason),
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Bullet {
            x,
            y,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
        }
    }
}

impl Bounds for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Invaders ──────────────────────────────────────────────────────────────────

/// One cell of the formation.  Dead invaders keep their slot in the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

impl Invader {
    pub fn new(x: f32, y: f32) -> Self {
        Invader {
            x,
            y,
            width: INVADER_WIDTH,
            height: INVADER_HEIGHT,
            alive: true,
        }
    }
}

impl Bounds for Invader {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Horizontal travel direction shared by every invader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub direction: Direction,
    /// Total distance dropped since the grid was built.  Bookkeeping only.
    pub drop_distance: f32,
    /// Horizontal step per tick for the current level.
    pub speed: f32,
}

impl Formation {
    pub fn new(speed: f32) -> Self {
        Formation {
            direction: Direction::Right,
            drop_distance: 0.0,
            speed,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub variant: Variant,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub invaders: Vec<Invader>,
    pub formation: Formation,
    pub score: u32,
    /// Current level, starting at 1.
    pub level: u32,
    pub status: GameStatus,
    /// Set when a bullet spawns, cleared once the fire key is let go.
    pub trigger_latched: bool,
    /// Ticks since launch; the host stamps key events with it.
    pub frame: u64,
}

impl GameState {
    pub fn is_started(&self) -> bool {
        self.status != GameStatus::NotStarted
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn is_level_complete(&self) -> bool {
        self.status == GameStatus::LevelComplete
    }

    pub fn alive_count(&self) -> usize {
        self.invaders.iter().filter(|i| i.alive).count()
    }
}
