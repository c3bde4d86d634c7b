mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{info, warn};

use space_invaders::compute::{init_state, tick};
use space_invaders::entities::{GameState, Variant};
use space_invaders::input::{Control, KeyTracker};
use space_invaders::scene::compose;
use space_invaders::viewport::Viewport;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RuleSet {
    /// One level; clearing the grid wins the game
    Simple,
    /// Successive levels with faster, larger formations
    Leveled,
}

impl From<RuleSet> for Variant {
    fn from(rules: RuleSet) -> Self {
        match rules {
            RuleSet::Simple => Variant::Simple,
            RuleSet::Leveled => Variant::Leveled,
        }
    }
}

/// Space Invaders in the terminal
#[derive(Parser, Debug)]
#[command(name = "space_invaders", version, about, long_about = None)]
struct Cli {
    /// Which edition of the rules to play
    #[arg(long, value_enum, default_value = "leveled")]
    variant: RuleSet,

    /// Simulation ticks (and redraws) per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Key bindings ──────────────────────────────────────────────────────────────

/// Space both fires and confirms, exactly like a single arcade button.
fn controls_for(code: &KeyCode) -> &'static [Control] {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => &[Control::Left],
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => &[Control::Right],
        KeyCode::Char(' ') => &[Control::Fire, Control::Confirm],
        _ => &[],
    }
}

fn is_quit(code: &KeyCode, modifiers: &KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame drains every pending terminal event into the key tracker,
/// takes one input snapshot, advances the game by one tick and redraws.
/// Key events are stamped with the state's own frame counter.
/// While the terminal is too small the game is paused and a notice is shown.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    fps: u32,
    mut viewport: Option<Viewport>,
) -> Result<()> {
    let frame_budget = Duration::from_secs(1) / fps;
    let mut keys = KeyTracker::with_fps(fps);

    loop {
        let frame_start = Instant::now();
        let frame = state.frame;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        if is_quit(&code, &modifiers) {
                            info!(score = state.score, level = state.level, "quit requested");
                            return Ok(());
                        }
                        for &control in controls_for(&code) {
                            keys.press(control, frame);
                        }
                    }
                    KeyEventKind::Repeat => {
                        for &control in controls_for(&code) {
                            keys.repeat(control, frame);
                        }
                    }
                    KeyEventKind::Release => {
                        for &control in controls_for(&code) {
                            keys.release(control);
                        }
                    }
                },
                Event::Resize(cols, rows) => {
                    viewport = match Viewport::new(cols, rows) {
                        Ok(v) => Some(v),
                        Err(err) => {
                            warn!(%err, "terminal resized below the minimum");
                            display::render_too_small(out, &err.to_string())?;
                            None
                        }
                    };
                }
                _ => {}
            }
        }

        if let Some(viewport) = &viewport {
            let input = keys.snapshot(frame);
            *state = tick(state, &input);
            display::render(out, &compose(state), viewport)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    let viewport = Viewport::new(cols, rows)?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enter raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let variant = Variant::from(cli.variant);
    info!(?variant, fps = cli.fps, cols, rows, keyboard_enhanced, "starting");

    let mut state = init_state(variant);
    let result = game_loop(&mut out, &mut state, &rx, cli.fps, Some(viewport));

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
