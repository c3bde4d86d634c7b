/// Rendering layer: all terminal I/O lives here.
///
/// Receives a mutable writer, a composed `Scene` and the current viewport.
/// No game logic is performed; this module only translates shapes and labels
/// into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::scene::{Paint, Scene, TextSize};
use space_invaders::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_DIMMED: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

fn color_of(paint: Paint) -> Color {
    match paint {
        Paint::Player => Color::Green,
        Paint::Bullet => Color::Yellow,
        Paint::InvaderRed => Color::Red,
        Paint::InvaderYellow => Color::Yellow,
        Paint::InvaderCyan => Color::Cyan,
        Paint::Detail => Color::Black,
        Paint::Text => Color::White,
        Paint::Highlight => Color::Green,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, scene: &Scene, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for shape in &scene.shapes {
        let Some(cells) = viewport.cells(&shape.rect) else {
            continue;
        };
        let color = if scene.dimmed && shape.paint != Paint::Detail {
            C_DIMMED
        } else {
            color_of(shape.paint)
        };
        out.queue(style::SetForegroundColor(color))?;
        let fill = "█".repeat(cells.cols as usize);
        for row in cells.row..cells.row + cells.rows {
            out.queue(cursor::MoveTo(cells.col, row))?;
            out.queue(Print(&fill))?;
        }
    }

    for label in &scene.labels {
        let Some((col, row, text)) = viewport.place(label) else {
            continue;
        };
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color_of(label.paint)))?;
        if label.size == TextSize::Title {
            out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        out.queue(Print(text))?;
        out.queue(style::SetAttribute(Attribute::Reset))?;
    }

    draw_controls_hint(out, viewport)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let hint = "← → / A D : Move   SPACE : Shoot / Confirm   Q : Quit";
    let shown: String = hint.chars().take(viewport.cols.saturating_sub(1) as usize).collect();
    out.queue(cursor::MoveTo(1, viewport.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(shown))?;
    Ok(())
}

/// Shown instead of the play field while the terminal is below the minimum size.
pub fn render_too_small<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(Color::Red))?;
    out.queue(Print(message))?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
