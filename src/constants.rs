/// Fixed geometry and tuning values for the play field.
///
/// All positions are in logical canvas units; the canvas never resizes.

// ── Canvas ───────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Horizontal spawn / reset position (centred).
pub const PLAYER_START_X: f32 = CANVAS_WIDTH / 2.0 - PLAYER_WIDTH / 2.0;
pub const PLAYER_Y: f32 = CANVAS_HEIGHT - 50.0;

/// Cannon barrel drawn on top of the player body.
pub const CANNON_WIDTH: f32 = 10.0;
pub const CANNON_HEIGHT: f32 = 10.0;

// ── Bullets ──────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BULLET_SPEED: f32 = 7.0;
pub const MAX_BULLETS: usize = 3;

// ── Invaders ─────────────────────────────────────────────────────────────────

pub const INVADER_WIDTH: f32 = 35.0;
pub const INVADER_HEIGHT: f32 = 25.0;
/// Vertical step applied to the whole formation when it hits a wall.
pub const FORMATION_DROP: f32 = 20.0;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const POINTS_PER_INVADER: u32 = 10;
