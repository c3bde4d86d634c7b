/// Input sink: turns key press / repeat / release events into one immutable
/// snapshot per frame.
///
/// Held keys are tracked by the frame they were last seen.  Terminals with
/// keyboard enhancement send real release events and keys drop out at once;
/// classic terminals only repeat presses, so a key counts as held while its
/// last press or repeat arrived within `HOLD_WINDOW`.  The window is fixed in
/// wall-clock time and converted to frames for the tick rate in use.

use std::collections::HashMap;
use std::time::Duration;

/// A key is considered "held" if its last press/repeat event arrived within
/// this long.  Must outlast the OS auto-repeat interval.
pub const HOLD_WINDOW: Duration = Duration::from_millis(133);

/// Tick rate assumed by `KeyTracker::new`.
pub const DEFAULT_FPS: u32 = 30;

/// `HOLD_WINDOW` expressed in whole frames at `fps`, never less than one.
pub fn hold_frames(fps: u32) -> u64 {
    let frames = (HOLD_WINDOW.as_secs_f64() * f64::from(fps)).ceil() as u64;
    frames.max(1)
}

/// Logical controls the simulation understands.  Physical key bindings live
/// in the host adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Fire,
    Confirm,
}

/// Everything the simulation reads from the keyboard on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// At least one confirm press since the previous snapshot.
    pub confirm: bool,
}

#[derive(Debug)]
pub struct KeyTracker {
    /// Maps each held control → the frame it was last seen (press or repeat).
    last_seen: HashMap<Control, u64>,
    confirm_pending: bool,
    hold_frames: u64,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::with_fps(DEFAULT_FPS)
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker whose hold window spans `HOLD_WINDOW` at `fps` ticks per second.
    pub fn with_fps(fps: u32) -> Self {
        Self {
            last_seen: HashMap::new(),
            confirm_pending: false,
            hold_frames: hold_frames(fps),
        }
    }

    pub fn hold_frames(&self) -> u64 {
        self.hold_frames
    }

    pub fn press(&mut self, control: Control, frame: u64) {
        self.last_seen.insert(control, frame);
        if control == Control::Confirm {
            self.confirm_pending = true;
        }
    }

    /// Auto-repeat refreshes the hold timestamp but never re-confirms.
    pub fn repeat(&mut self, control: Control, frame: u64) {
        self.last_seen.insert(control, frame);
    }

    pub fn release(&mut self, control: Control) {
        self.last_seen.remove(&control);
    }

    pub fn is_held(&self, control: Control, frame: u64) -> bool {
        self.last_seen
            .get(&control)
            .map(|&last| frame.saturating_sub(last) <= self.hold_frames)
            .unwrap_or(false)
    }

    /// Build the snapshot for `frame` and consume any pending confirm press.
    pub fn snapshot(&mut self, frame: u64) -> InputSnapshot {
        let snapshot = InputSnapshot {
            left: self.is_held(Control::Left, frame),
            right: self.is_held(Control::Right, frame),
            fire: self.is_held(Control::Fire, frame),
            confirm: self.confirm_pending,
        };
        self.confirm_pending = false;
        snapshot
    }
}
