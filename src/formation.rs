/// Formation controller: moves the whole invader grid as one lockstep unit.

use tracing::debug;

use crate::constants::{CANVAS_WIDTH, FORMATION_DROP};
use crate::entities::{Direction, Formation, Invader};

/// What the formation did on a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormationStep {
    /// No invader is alive; nothing moved.
    Cleared,
    /// A wall was reached: direction flipped and every live invader dropped.
    Dropped,
    /// Every live invader moved sideways by the level speed.
    Shifted,
}

#[derive(Clone, Debug)]
pub struct FormationAdvance {
    pub formation: Formation,
    pub invaders: Vec<Invader>,
    pub step: FormationStep,
}

/// True if a live invader's leading edge touches the wall it is heading for.
fn at_wall(invader: &Invader, direction: Direction) -> bool {
    match direction {
        Direction::Right => invader.x + invader.width >= CANVAS_WIDTH,
        Direction::Left => invader.x <= 0.0,
    }
}

/// Advance the formation by one tick.  Dead invaders are skipped but keep
/// their slot, so the returned grid always has the same length.
pub fn advance(formation: &Formation, invaders: &[Invader]) -> FormationAdvance {
    let mut live = invaders.iter().filter(|i| i.alive).peekable();
    if live.peek().is_none() {
        return FormationAdvance {
            formation: formation.clone(),
            invaders: invaders.to_vec(),
            step: FormationStep::Cleared,
        };
    }

    if live.any(|i| at_wall(i, formation.direction)) {
        let direction = formation.direction.flipped();
        debug!(?direction, drop = formation.drop_distance + FORMATION_DROP, "formation reversed");
        let invaders = invaders
            .iter()
            .map(|i| {
                if i.alive {
                    Invader { y: i.y + FORMATION_DROP, ..i.clone() }
                } else {
                    i.clone()
                }
            })
            .collect();
        return FormationAdvance {
            formation: Formation {
                direction,
                drop_distance: formation.drop_distance + FORMATION_DROP,
                ..formation.clone()
            },
            invaders,
            step: FormationStep::Dropped,
        };
    }

    let dx = formation.speed * formation.direction.sign();
    let invaders = invaders
        .iter()
        .map(|i| {
            if i.alive {
                Invader { x: i.x + dx, ..i.clone() }
            } else {
                i.clone()
            }
        })
        .collect();
    FormationAdvance {
        formation: formation.clone(),
        invaders,
        step: FormationStep::Shifted,
    }
}
