use space_invaders::compute::{init_state, tick};
use space_invaders::entities::*;
use space_invaders::input::InputSnapshot;
use space_invaders::state_machine::*;

fn confirm() -> InputSnapshot {
    InputSnapshot { confirm: true, ..InputSnapshot::default() }
}

/// A game part-way through level 2 with some damage done.
fn mid_game() -> GameState {
    let mut s = start_game(&init_state(Variant::Leveled));
    s = advance_level(&s);
    s.score = 340;
    s.player.x = 120.0;
    s.bullets.push(Bullet::new(100.0, 200.0));
    s.invaders[0].alive = false;
    s.formation.direction = Direction::Left;
    s.formation.drop_distance = 60.0;
    s
}

// ── start ─────────────────────────────────────────────────────────────────────

#[test]
fn confirm_starts_a_fresh_game() {
    let s = tick(&init_state(Variant::Leveled), &confirm());
    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.is_started());
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert_eq!(s.alive_count(), 50);
}

// ── playing ───────────────────────────────────────────────────────────────────

#[test]
fn confirm_while_playing_is_a_no_op() {
    let s = mid_game();
    let s2 = on_confirm(&s);
    assert_eq!(s2, s);
}

#[test]
fn confirm_tick_while_playing_only_simulates() {
    let s = mid_game();
    let s2 = tick(&s, &confirm());
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.level, 2);
    assert_eq!(s2.score, 340);
    assert!(!s2.invaders[0].alive);
}

// ── restart ───────────────────────────────────────────────────────────────────

#[test]
fn confirm_after_game_over_restarts_at_level_one() {
    let mut s = mid_game();
    s.status = GameStatus::GameOver(EndReason::Overrun);
    let s2 = on_confirm(&s);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.level, 1);
    assert_eq!(s2.invaders.len(), 50);
    assert_eq!(s2.alive_count(), 50);
    assert_eq!(s2.formation.speed, 1.0);
}

#[test]
fn restart_after_a_win_in_simple_variant() {
    let mut s = start_game(&init_state(Variant::Simple));
    s.score = 500;
    s.status = GameStatus::GameOver(EndReason::Cleared);
    let s2 = on_confirm(&s);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.score, 0);
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn confirm_after_level_complete_advances() {
    let mut s = start_game(&init_state(Variant::Leveled));
    s.score = 500;
    s.status = GameStatus::LevelComplete;
    let s2 = on_confirm(&s);
    assert_eq!(s2.status, GameStatus::Playing);
    assert_eq!(s2.level, 2);
    assert_eq!(s2.score, 500);
    assert_eq!(s2.invaders.len(), 66);
    assert_eq!(s2.formation.speed, 1.5);
}

#[test]
fn advancing_past_level_three_keeps_its_grid() {
    let mut s = start_game(&init_state(Variant::Leveled));
    s.level = 3;
    s.status = GameStatus::LevelComplete;
    let s2 = on_confirm(&s);
    assert_eq!(s2.level, 4);
    assert_eq!(s2.invaders.len(), 84);
    assert_eq!(s2.formation.speed, 2.0);
}

#[test]
fn level_complete_is_inert_in_simple_variant() {
    let mut s = start_game(&init_state(Variant::Simple));
    s.status = GameStatus::LevelComplete;
    assert_eq!(on_confirm(&s), s);
}

// ── reset ─────────────────────────────────────────────────────────────────────

#[test]
fn reset_restores_round_but_keeps_progress() {
    let s = mid_game();
    let s2 = reset_round(&s);
    assert_eq!(s2.player.x, 375.0);
    assert!(s2.bullets.is_empty());
    assert_eq!(s2.alive_count(), 66);
    assert_eq!(s2.formation.direction, Direction::Right);
    assert_eq!(s2.formation.drop_distance, 0.0);
    assert_eq!(s2.score, 340);
    assert_eq!(s2.level, 2);
}

#[test]
fn start_resets_a_dirty_state() {
    let mut s = mid_game();
    s.status = GameStatus::NotStarted;
    let s2 = on_confirm(&s);
    assert_eq!(s2.score, 0);
    assert_eq!(s2.level, 1);
    assert_eq!(s2.player.x, 375.0);
    assert!(s2.bullets.is_empty());
}
