pub mod maker;

use rand::Rng;
use strum::IntoEnumIterator;

pub use maker::backtrack::{NeighborOrder, Shuffled};
pub use maker::{Cell, Direction, Grid, Walls};

use crate::error::{ConfigError, GameError};

#[derive(Clone, Debug)]
pub struct Maze {
    pub visited: Grid,
    pub walls: Walls,
    pub start: Cell,
}

impl Maze {
    /// Carves a perfect maze from a uniformly random start cell.
    pub fn generate<R: Rng>(
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        check_dimensions(rows, columns)?;

        let start = Cell::new(rng.random_range(0..rows), rng.random_range(0..columns));
        Self::carve_from(rows, columns, start, &mut Shuffled(rng))
    }

    pub fn carve_from<O: NeighborOrder + ?Sized>(
        rows: usize,
        columns: usize,
        start: Cell,
        order: &mut O,
    ) -> Result<Self, GameError> {
        check_dimensions(rows, columns)?;

        let mut visited = Grid::new(rows, columns);
        let mut walls = Walls::new(rows, columns);
        maker::backtrack::carve(&mut visited, &mut walls, start, order)?;

        Ok(Self {
            visited,
            walls,
            start,
        })
    }

    pub fn rows(&self) -> usize {
        self.visited.rows()
    }

    pub fn columns(&self) -> usize {
        self.visited.columns()
    }

    pub fn open_edge_count(&self) -> usize {
        self.walls.open_count()
    }

    /// Cells reachable from `cell` in one step through an open edge.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let (rows, columns) = (self.rows(), self.columns());
        Direction::iter()
            .filter(move |&direction| self.walls.is_open(cell, direction))
            .filter_map(move |direction| cell.step(direction, rows, columns))
    }

    /// Text picture of the maze: `██` for walls and corners, spaces for cells
    /// and open edges.
    pub fn log(&self) -> String {
        let (rows, columns) = (self.rows(), self.columns());
        let solid = "██";
        let space = "  ";
        let mut lines = Vec::with_capacity(2 * rows + 1);

        lines.push(solid.repeat(2 * columns + 1));
        for row in 0..rows {
            let mut cells = String::from(solid);
            let mut below = String::from(solid);

            for column in 0..columns {
                let cell = Cell::new(row, column);
                cells.push_str(space);
                cells.push_str(if self.walls.is_open(cell, Direction::Right) {
                    space
                } else {
                    solid
                });

                below.push_str(if self.walls.is_open(cell, Direction::Down) {
                    space
                } else {
                    solid
                });
                below.push_str(solid);
            }

            lines.push(cells);
            lines.push(below);
        }

        lines.join("\n")
    }
}

fn check_dimensions(rows: usize, columns: usize) -> Result<(), ConfigError> {
    if rows == 0 {
        return Err(ConfigError::ZeroRows);
    }
    if columns == 0 {
        return Err(ConfigError::ZeroColumns);
    }
    Ok(())
}
