/// Renderable description of one frame.
///
/// `compose` reads a `GameState` and lists what to draw, in draw order, in
/// logical canvas coordinates.  It knows nothing about the output device; the
/// host adapter turns shapes and labels into terminal cells.

use crate::constants::{CANNON_HEIGHT, CANNON_WIDTH, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::entities::{EndReason, GameState, GameStatus, Variant};
use crate::geometry::{Bounds, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    Player,
    Bullet,
    InvaderRed,
    InvaderYellow,
    InvaderCyan,
    /// Eyes and mouth cut into an invader's body.
    Detail,
    Text,
    Highlight,
}

/// Invader colour changes with the level: red, then yellow, then cyan.
pub fn invader_paint(level: u32) -> Paint {
    match level {
        0 | 1 => Paint::InvaderRed,
        2 => Paint::InvaderYellow,
        _ => Paint::InvaderCyan,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub rect: Rect,
    pub paint: Paint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Title,
    Body,
}

/// A line of text anchored at its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub align: Align,
    pub paint: Paint,
    pub size: TextSize,
}

impl Label {
    fn centered(text: impl Into<String>, y: f32, paint: Paint, size: TextSize) -> Self {
        Label {
            text: text.into(),
            x: CANVAS_WIDTH / 2.0,
            y,
            align: Align::Center,
            paint,
            size,
        }
    }

    fn hud(text: impl Into<String>, y: f32) -> Self {
        Label {
            text: text.into(),
            x: 10.0,
            y,
            align: Align::Left,
            paint: Paint::Text,
            size: TextSize::Body,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
    /// Everything under the labels is dimmed by an end-of-round overlay.
    pub dimmed: bool,
}

// ── Public entry point ────────────────────────────────────────────────────────

pub fn compose(state: &GameState) -> Scene {
    if !state.is_started() {
        return start_screen();
    }

    let mut scene = Scene::default();
    let p = &state.player;
    scene.shapes.push(Shape { rect: p.bounds(), paint: Paint::Player });
    scene.shapes.push(Shape {
        rect: Rect::new(
            p.x + p.width / 2.0 - CANNON_WIDTH / 2.0,
            p.y - CANNON_HEIGHT,
            CANNON_WIDTH,
            CANNON_HEIGHT,
        ),
        paint: Paint::Player,
    });

    for bullet in &state.bullets {
        scene.shapes.push(Shape { rect: bullet.bounds(), paint: Paint::Bullet });
    }

    let paint = invader_paint(state.level);
    for invader in state.invaders.iter().filter(|i| i.alive) {
        scene.shapes.push(Shape { rect: invader.bounds(), paint });
        scene.shapes.extend(invader_details(&invader.bounds()));
    }

    scene.labels.push(Label::hud(format!("Score: {}", state.score), 30.0));
    if state.variant == Variant::Leveled {
        scene.labels.push(Label::hud(format!("Level: {}", state.level), 60.0));
    }

    match state.status {
        GameStatus::LevelComplete => {
            scene.dimmed = true;
            scene.labels.extend(level_complete_overlay(state));
        }
        GameStatus::GameOver(reason) => {
            scene.dimmed = true;
            scene.labels.extend(game_over_overlay(state, reason));
        }
        GameStatus::NotStarted | GameStatus::Playing => {}
    }

    scene
}

/// Two eyes and a mouth, drawn over the invader body.
fn invader_details(body: &Rect) -> [Shape; 3] {
    let detail = |x, y, width, height| Shape {
        rect: Rect::new(x, y, width, height),
        paint: Paint::Detail,
    };
    [
        detail(body.x + 5.0, body.y + 5.0, 8.0, 8.0),
        detail(body.right() - 13.0, body.y + 5.0, 8.0, 8.0),
        detail(body.x + 15.0, body.y + 15.0, 10.0, 5.0),
    ]
}

// ── Screens & overlays ────────────────────────────────────────────────────────

fn start_screen() -> Scene {
    let cy = CANVAS_HEIGHT / 2.0;
    Scene {
        shapes: Vec::new(),
        labels: vec![
            Label::centered("SPACE INVADERS", cy - 50.0, Paint::Text, TextSize::Title),
            Label::centered("Press SPACE to start", cy, Paint::Text, TextSize::Body),
            Label::centered(
                "Use ARROW KEYS to move, SPACE to shoot",
                cy + 40.0,
                Paint::Text,
                TextSize::Body,
            ),
        ],
        dimmed: false,
    }
}

fn level_complete_overlay(state: &GameState) -> Vec<Label> {
    let cy = CANVAS_HEIGHT / 2.0;
    vec![
        Label::centered("LEVEL COMPLETE!", cy - 50.0, Paint::Highlight, TextSize::Title),
        Label::centered(format!("Score: {}", state.score), cy, Paint::Text, TextSize::Body),
        Label::centered(
            format!("Advancing to Level {}", state.level + 1),
            cy + 30.0,
            Paint::Text,
            TextSize::Body,
        ),
        Label::centered("Press SPACE to continue", cy + 70.0, Paint::Text, TextSize::Body),
    ]
}

fn game_over_overlay(state: &GameState, reason: EndReason) -> Vec<Label> {
    let cy = CANVAS_HEIGHT / 2.0;
    let heading = match reason {
        EndReason::Overrun => Label::centered("GAME OVER", cy - 50.0, Paint::Text, TextSize::Title),
        EndReason::Cleared => {
            Label::centered("YOU WIN!", cy - 50.0, Paint::Highlight, TextSize::Title)
        }
    };
    let mut labels = vec![
        heading,
        Label::centered(format!("Final Score: {}", state.score), cy, Paint::Text, TextSize::Body),
    ];
    if state.variant == Variant::Leveled {
        labels.push(Label::centered(
            format!("Level Reached: {}", state.level),
            cy + 30.0,
            Paint::Text,
            TextSize::Body,
        ));
    }
    labels.push(Label::centered(
        "Press SPACE to play again",
        cy + 70.0,
        Paint::Text,
        TextSize::Body,
    ));
    labels
}
