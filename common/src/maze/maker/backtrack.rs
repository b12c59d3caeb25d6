use rand::Rng;

use super::{Cell, Direction, Grid, Walls, shuffle::shuffle};
use crate::error::{ConfigError, GameError};

/// Decides the order in which the carver tries a cell's four neighbours.
pub trait NeighborOrder {
    fn arrange(&mut self, directions: &mut [Direction; 4]);
}

/// Uniformly random neighbour order.
pub struct Shuffled<'a, R: Rng>(pub &'a mut R);

impl<R: Rng> NeighborOrder for Shuffled<'_, R> {
    fn arrange(&mut self, directions: &mut [Direction; 4]) {
        shuffle(directions, &mut *self.0);
    }
}

struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter<O: NeighborOrder + ?Sized>(cell: Cell, visited: &mut Grid, order: &mut O) -> Frame {
        visited.set(cell.row, cell.column);
        let mut directions = Direction::ALL;
        order.arrange(&mut directions);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Randomized depth-first carving from `start`. Every cell is entered exactly
/// once and an edge is opened only on the way into an unvisited cell, so the
/// open edges form a spanning tree.
///
/// The stack of frames replaces recursion: a frame remembers which of its
/// shuffled directions it has tried, so neighbour orders are drawn in the same
/// sequence a recursive walk would draw them.
pub fn carve<O: NeighborOrder + ?Sized>(
    visited: &mut Grid,
    walls: &mut Walls,
    start: Cell,
    order: &mut O,
) -> Result<(), GameError> {
    let rows = visited.rows();
    let columns = visited.columns();

    if rows == 0 {
        return Err(ConfigError::ZeroRows.into());
    }
    if columns == 0 {
        return Err(ConfigError::ZeroColumns.into());
    }
    if start.row >= rows || start.column >= columns {
        return Err(ConfigError::StartOutOfBounds {
            start,
            rows,
            columns,
        }
        .into());
    }

    if visited[(start.row, start.column)] {
        return Ok(());
    }

    let mut stack = vec![Frame::enter(start, visited, order)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            stack.pop();
            continue;
        }

        let direction = frame.directions[frame.next];
        frame.next += 1;
        let current = frame.cell;

        let Some(next) = current.step(direction, rows, columns) else {
            continue;
        };
        if visited[(next.row, next.column)] {
            continue;
        }

        walls.open(current, direction);
        stack.push(Frame::enter(next, visited, order));
    }

    Ok(())
}
