use thiserror::Error;

use crate::viewport::{MIN_COLS, MIN_ROWS};

/// Failures acquiring or sizing the output surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("terminal is {cols}x{rows}; at least {}x{} cells are needed", MIN_COLS, MIN_ROWS)]
    TooSmall { cols: u16, rows: u16 },
}
