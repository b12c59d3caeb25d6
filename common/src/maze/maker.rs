pub mod backtrack;
pub mod shuffle;

use std::ops::Index;

use strum::EnumIter;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell { row, column }
    }

    /// The neighbouring cell one step in `direction`, or `None` if that step
    /// leaves a `rows` x `columns` grid.
    pub fn step(self, direction: Direction, rows: usize, columns: usize) -> Option<Cell> {
        let Cell { row, column } = self;
        let (row, column) = match direction {
            Direction::Up => (row.checked_sub(1)?, column),
            Direction::Right => (row, column + 1),
            Direction::Down => (row + 1, column),
            Direction::Left => (row, column.checked_sub(1)?),
        };

        if row < rows && column < columns {
            Some(Cell { row, column })
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Fixed-size, row-major matrix of booleans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-`false` matrix. Either dimension may be zero: a maze one column
    /// wide has no vertical edges at all.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, column: usize) {
        debug_assert!(
            row < self.rows && column < self.columns,
            "grid coordinates are out of bounds"
        );

        self.cells[row * self.columns + column] = true;
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn all(&self) -> bool {
        self.cells.iter().all(|&cell| cell)
    }

    /// Yields `(row, column, value)` for every entry in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &value)| (i / self.columns, i % self.columns, value))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = bool;

    fn index(&self, (row, column): (usize, usize)) -> &bool {
        assert!(
            row < self.rows && column < self.columns,
            "grid coordinates ({}, {}) are out of bounds for {}x{}",
            row,
            column,
            self.rows,
            self.columns
        );

        &self.cells[row * self.columns + column]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Open/closed state of every interior edge. `true` means open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walls {
    /// `rows x (columns - 1)`: entry `(r, c)` joins `(r, c)` and `(r, c + 1)`.
    pub verticals: Grid,
    /// `(rows - 1) x columns`: entry `(r, c)` joins `(r, c)` and `(r + 1, c)`.
    pub horizontals: Grid,
}

impl Walls {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            verticals: Grid::new(rows, columns.saturating_sub(1)),
            horizontals: Grid::new(rows.saturating_sub(1), columns),
        }
    }

    fn grid(&self, axis: Axis) -> &Grid {
        match axis {
            Axis::Vertical => &self.verticals,
            Axis::Horizontal => &self.horizontals,
        }
    }

    fn grid_mut(&mut self, axis: Axis) -> &mut Grid {
        match axis {
            Axis::Vertical => &mut self.verticals,
            Axis::Horizontal => &mut self.horizontals,
        }
    }

    // Each edge is stored once, at the lower row/column of the pair it joins,
    // so `left` and `up` look one index back. `None` for edges off the grid.
    fn edge(&self, cell: Cell, direction: Direction) -> Option<(Axis, usize, usize)> {
        let Cell { row, column } = cell;
        let (axis, row, column) = match direction {
            Direction::Left => (Axis::Vertical, row, column.checked_sub(1)?),
            Direction::Right => (Axis::Vertical, row, column),
            Direction::Up => (Axis::Horizontal, row.checked_sub(1)?, column),
            Direction::Down => (Axis::Horizontal, row, column),
        };
        self.grid(axis).get(row, column)?;
        Some((axis, row, column))
    }

    /// Opens the edge on `direction`'s side of `cell`. Returns `false`, and
    /// changes nothing, when that edge lies on the outer boundary.
    pub fn open(&mut self, cell: Cell, direction: Direction) -> bool {
        let Some((axis, row, column)) = self.edge(cell, direction) else {
            return false;
        };
        self.grid_mut(axis).set(row, column);
        true
    }

    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.edge(cell, direction)
            .map(|(axis, row, column)| self.grid(axis)[(row, column)])
            .unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.verticals.count() + self.horizontals.count()
    }
}
