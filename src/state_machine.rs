/// Game lifecycle transitions.
///
/// `NotStarted → Playing → {GameOver, LevelComplete} → Playing`.  The only
/// trigger is the confirm input; what it does depends on the current status.

use tracing::info;

use crate::entities::{Formation, GameState, GameStatus, Player, Variant};
use crate::levels::{config_for, create_invaders, LAST_DEFINED_LEVEL};

/// Put the player, bullets and formation back to the start of the current
/// level.  Score, level and status are left to the caller.
pub fn reset_round(state: &GameState) -> GameState {
    let config = config_for(state.variant, state.level);
    GameState {
        player: Player {
            x: Player::default().x,
            ..state.player.clone()
        },
        bullets: Vec::new(),
        invaders: create_invaders(&config),
        formation: Formation::new(config.speed),
        ..state.clone()
    }
}

pub fn start_game(state: &GameState) -> GameState {
    info!(variant = ?state.variant, "game started");
    reset_round(&GameState {
        status: GameStatus::Playing,
        level: 1,
        score: 0,
        ..state.clone()
    })
}

pub fn restart_game(state: &GameState) -> GameState {
    info!(previous_score = state.score, previous_level = state.level, "game restarted");
    reset_round(&GameState {
        status: GameStatus::Playing,
        level: 1,
        score: 0,
        ..state.clone()
    })
}

pub fn advance_level(state: &GameState) -> GameState {
    let level = state.level + 1;
    if level > LAST_DEFINED_LEVEL {
        info!(level, capped_at = LAST_DEFINED_LEVEL, "advancing past the difficulty table");
    } else {
        info!(level, "advancing to next level");
    }
    reset_round(&GameState {
        status: GameStatus::Playing,
        level,
        ..state.clone()
    })
}

/// Apply one confirm press.  A no-op while playing, and in the simple
/// variant there is no level-complete state to leave.
pub fn on_confirm(state: &GameState) -> GameState {
    match state.status {
        GameStatus::NotStarted => start_game(state),
        GameStatus::GameOver(_) => restart_game(state),
        GameStatus::LevelComplete if state.variant == Variant::Leveled => advance_level(state),
        GameStatus::LevelComplete | GameStatus::Playing => state.clone(),
    }
}
