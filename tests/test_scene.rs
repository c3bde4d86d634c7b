use space_invaders::compute::init_state;
use space_invaders::entities::*;
use space_invaders::geometry::Rect;
use space_invaders::scene::*;
use space_invaders::state_machine::start_game;

fn texts(scene: &Scene) -> Vec<&str> {
    scene.labels.iter().map(|l| l.text.as_str()).collect()
}

#[test]
fn start_screen_has_only_text() {
    let scene = compose(&init_state(Variant::Leveled));
    assert!(scene.shapes.is_empty());
    assert!(!scene.dimmed);
    assert_eq!(
        texts(&scene),
        vec![
            "SPACE INVADERS",
            "Press SPACE to start",
            "Use ARROW KEYS to move, SPACE to shoot",
        ]
    );
    assert_eq!(scene.labels[0].size, TextSize::Title);
    assert_eq!(scene.labels[0].align, Align::Center);
}

#[test]
fn playing_scene_draws_player_cannon_bullets_invaders() {
    let mut s = start_game(&init_state(Variant::Leveled));
    s.bullets.push(Bullet::new(100.0, 300.0));
    s.invaders[4].alive = false;
    let scene = compose(&s);

    // player + cannon + 1 bullet + 49 live invaders with three details each
    assert_eq!(scene.shapes.len(), 2 + 1 + 49 * 4);
    assert_eq!(scene.shapes[0].rect, Rect::new(375.0, 550.0, 50.0, 30.0));
    assert_eq!(scene.shapes[1].rect, Rect::new(395.0, 540.0, 10.0, 10.0));
    assert_eq!(scene.shapes[2].paint, Paint::Bullet);
    let bodies = scene.shapes[3..].iter().filter(|s| s.paint == Paint::InvaderRed).count();
    let details = scene.shapes[3..].iter().filter(|s| s.paint == Paint::Detail).count();
    assert_eq!((bodies, details), (49, 49 * 3));
    assert!(!scene.dimmed);
    assert_eq!(texts(&scene), vec!["Score: 0", "Level: 1"]);
}

#[test]
fn invader_details_sit_inside_the_body() {
    let mut s = start_game(&init_state(Variant::Leveled));
    s.invaders = vec![Invader::new(100.0, 200.0)];
    let scene = compose(&s);

    let rects: Vec<Rect> = scene.shapes[2..].iter().map(|s| s.rect).collect();
    assert_eq!(
        rects,
        vec![
            Rect::new(100.0, 200.0, 35.0, 25.0),
            Rect::new(105.0, 205.0, 8.0, 8.0),
            Rect::new(122.0, 205.0, 8.0, 8.0),
            Rect::new(115.0, 215.0, 10.0, 5.0),
        ]
    );
    assert!(scene.shapes[3..].iter().all(|s| s.paint == Paint::Detail));
}

#[test]
fn hud_labels_sit_top_left() {
    let s = start_game(&init_state(Variant::Leveled));
    let scene = compose(&s);
    assert_eq!((scene.labels[0].x, scene.labels[0].y), (10.0, 30.0));
    assert_eq!((scene.labels[1].x, scene.labels[1].y), (10.0, 60.0));
    assert_eq!(scene.labels[0].align, Align::Left);
}

#[test]
fn simple_variant_hud_has_no_level() {
    let s = start_game(&init_state(Variant::Simple));
    assert_eq!(texts(&compose(&s)), vec!["Score: 0"]);
}

#[test]
fn invader_colour_follows_level() {
    assert_eq!(invader_paint(1), Paint::InvaderRed);
    assert_eq!(invader_paint(2), Paint::InvaderYellow);
    assert_eq!(invader_paint(3), Paint::InvaderCyan);
    assert_eq!(invader_paint(9), Paint::InvaderCyan);
}

#[test]
fn level_complete_overlay() {
    let mut s = start_game(&init_state(Variant::Leveled));
    s.score = 500;
    s.status = GameStatus::LevelComplete;
    let scene = compose(&s);
    assert!(scene.dimmed);
    let t = texts(&scene);
    assert!(t.contains(&"LEVEL COMPLETE!"));
    assert!(t.contains(&"Score: 500"));
    assert!(t.contains(&"Advancing to Level 2"));
    assert!(t.contains(&"Press SPACE to continue"));
}

#[test]
fn game_over_overlay() {
    let mut s = start_game(&init_state(Variant::Leveled));
    s.score = 120;
    s.level = 2;
    s.status = GameStatus::GameOver(EndReason::Overrun);
    let scene = compose(&s);
    assert!(scene.dimmed);
    let t = texts(&scene);
    assert!(t.contains(&"GAME OVER"));
    assert!(t.contains(&"Final Score: 120"));
    assert!(t.contains(&"Level Reached: 2"));
    assert!(t.contains(&"Press SPACE to play again"));
}

#[test]
fn cleared_game_shows_win_heading() {
    let mut s = start_game(&init_state(Variant::Simple));
    s.score = 500;
    s.status = GameStatus::GameOver(EndReason::Cleared);
    let t = texts(&compose(&s)).join("|");
    assert!(t.contains("YOU WIN!"));
    assert!(!t.contains("GAME OVER"));
    assert!(!t.contains("Level Reached"));
    assert!(t.contains("Final Score: 500"));
}
