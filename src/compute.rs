/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, the frame's `InputSnapshot`) and returns a
/// brand-new `GameState`.  Nothing here touches the terminal or the clock.

use tracing::info;

use crate::constants::{BULLET_SPEED, CANVAS_WIDTH, MAX_BULLETS, POINTS_PER_INVADER};
use crate::entities::{Bullet, EndReason, Formation, GameState, GameStatus, Player, Variant};
use crate::formation::{advance, FormationStep};
use crate::geometry::{overlaps, Bounds};
use crate::input::InputSnapshot;
use crate::levels::{config_for, create_invaders};
use crate::state_machine::on_confirm;

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Points for one destroyed invader.  Higher levels pay more.
pub fn points_per_kill(variant: Variant, level: u32) -> u32 {
    match variant {
        Variant::Simple => POINTS_PER_INVADER,
        Variant::Leveled => POINTS_PER_INVADER * level,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the waiting-to-start state for a given rule set.
pub fn init_state(variant: Variant) -> GameState {
    let config = config_for(variant, 1);
    GameState {
        variant,
        player: Player::default(),
        bullets: Vec::new(),
        invaders: create_invaders(&config),
        formation: Formation::new(config.speed),
        score: 0,
        level: 1,
        status: GameStatus::NotStarted,
        trigger_latched: false,
        frame: 0,
    }
}

// ── Input-driven updates (pure) ──────────────────────────────────────────────

/// Horizontal movement.  The edge check happens before the step, and both
/// directions apply when both keys are held.
pub fn move_player(state: &GameState, input: &InputSnapshot) -> GameState {
    let p = &state.player;
    let mut x = p.x;
    if input.left && x > 0.0 {
        x -= p.speed;
    }
    if input.right && x < CANVAS_WIDTH - p.width {
        x += p.speed;
    }
    GameState {
        player: Player { x, ..p.clone() },
        ..state.clone()
    }
}

/// Fire a bullet from the cannon: one per press, at most 3 in flight.
///
/// A press that finds the cap full stays armed and fires as soon as a slot
/// frees up, as long as the key is still held.
pub fn player_shoot(state: &GameState, fire: bool) -> GameState {
    if !fire || state.trigger_latched || state.bullets.len() >= MAX_BULLETS {
        return state.clone();
    }
    let p = &state.player;
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet::new(p.x + p.width / 2.0 - 2.0, p.y));
    GameState {
        bullets,
        trigger_latched: true,
        ..state.clone()
    }
}

/// Move bullets, drop the ones that left the top, and resolve hits.
///
/// Hits resolve newest bullet first; each bullet kills at most the first live
/// invader it overlaps in grid order.  Spent bullets are compacted out after
/// the pass.
pub fn update_bullets(state: &GameState) -> GameState {
    let moved: Vec<Bullet> = state
        .bullets
        .iter()
        .map(|b| Bullet { y: b.y - BULLET_SPEED, ..b.clone() })
        .filter(|b| b.y >= 0.0)
        .collect();

    let mut invaders = state.invaders.clone();
    let mut spent = vec![false; moved.len()];
    let mut kills: u32 = 0;

    for (bi, bullet) in moved.iter().enumerate().rev() {
        let rect = bullet.bounds();
        if let Some(target) = invaders
            .iter_mut()
            .find(|inv| inv.alive && overlaps(&rect, &inv.bounds()))
        {
            target.alive = false;
            spent[bi] = true;
            kills += 1;
        }
    }

    let bullets = moved
        .into_iter()
        .zip(spent)
        .filter(|(_, used)| !used)
        .map(|(b, _)| b)
        .collect();

    GameState {
        bullets,
        invaders,
        score: state.score + kills * points_per_kill(state.variant, state.level),
        ..state.clone()
    }
}

/// True once any live invader's bottom edge has reached the player's row.
pub fn invaders_reached_player(state: &GameState) -> bool {
    state
        .invaders
        .iter()
        .any(|i| i.alive && i.y + i.height >= state.player.y)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// One simulation step.  Callers must only run it while playing; `tick`
/// takes care of that.
pub fn step(state: &GameState, input: &InputSnapshot) -> GameState {
    let state = move_player(state, input);
    let state = player_shoot(&state, input.fire);
    let state = update_bullets(&state);

    let moved = advance(&state.formation, &state.invaders);
    let state = GameState {
        formation: moved.formation,
        invaders: moved.invaders,
        ..state
    };

    let status = if invaders_reached_player(&state) {
        info!(score = state.score, level = state.level, "invaders reached the cannon");
        GameStatus::GameOver(EndReason::Overrun)
    } else if moved.step == FormationStep::Cleared {
        match state.variant {
            Variant::Simple => {
                info!(score = state.score, "formation cleared, game won");
                GameStatus::GameOver(EndReason::Cleared)
            }
            Variant::Leveled => {
                info!(score = state.score, level = state.level, "level complete");
                GameStatus::LevelComplete
            }
        }
    } else {
        state.status
    };

    GameState { status, ..state }
}

/// Advance the game by one frame: apply a confirm press, release the fire
/// latch once the key is up, then simulate if a round is in progress.
pub fn tick(state: &GameState, input: &InputSnapshot) -> GameState {
    let mut next = if input.confirm {
        on_confirm(state)
    } else {
        state.clone()
    };
    next.frame = state.frame + 1;
    next.trigger_latched = next.trigger_latched && input.fire;

    if next.is_playing() {
        step(&next, input)
    } else {
        next
    }
}
