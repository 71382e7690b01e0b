use std::fmt;

use crate::{
    array::Array2D,
    cell::{Cell, Wall},
    error::{Error, Result},
    pos::Pos,
};

/// Rectangular field of cells with symmetric wall state.
///
/// Every wall mutation between two cells goes through the grid, which
/// updates both sides of the shared edge together.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(rows: i32, cols: i32) -> Result<Grid> {
        if rows <= 0 || cols <= 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }

        Ok(Grid {
            cells: Array2D::from_fn(rows as usize, cols as usize, Cell::new),
        })
    }

    pub fn rows(&self) -> i32 {
        self.cells.rows() as i32
    }

    pub fn cols(&self) -> i32 {
        self.cells.cols() as i32
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bottom right cell, the default exit.
    pub fn last(&self) -> Pos {
        Pos(self.rows() - 1, self.cols() - 1)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.pos_to_idx(pos).is_some()
    }

    pub fn cell_at(&self, pos: Pos) -> Result<&Cell> {
        self.cells.get(pos).ok_or(Error::OutOfBounds(pos))
    }

    pub fn cell_at_mut(&mut self, pos: Pos) -> Result<&mut Cell> {
        self.cells.get_mut(pos).ok_or(Error::OutOfBounds(pos))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter_pos()
    }

    pub fn reset_visited(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.visited = false);
    }

    /// Position of the neighbour behind `wall`, if it lies inside the grid.
    pub fn neighbor(&self, pos: Pos, wall: Wall) -> Option<Pos> {
        let next = pos + wall.offset();
        (self.contains(pos) && self.contains(next)).then_some(next)
    }

    /// Returns the wall of `a` that faces `b`, if the cells are adjacent.
    pub fn which_wall_between(a: Pos, b: Pos) -> Option<Wall> {
        Wall::from_offset(b - a)
    }

    pub fn remove_wall_between(&mut self, a: Pos, b: Pos) -> Result<()> {
        self.set_wall_between(a, b, false)
    }

    pub fn add_wall_between(&mut self, a: Pos, b: Pos) -> Result<()> {
        self.set_wall_between(a, b, true)
    }

    fn set_wall_between(&mut self, a: Pos, b: Pos, present: bool) -> Result<()> {
        let wall = Self::which_wall_between(a, b).ok_or(Error::NotAdjacent(a, b))?;
        if !self.contains(a) {
            return Err(Error::OutOfBounds(a));
        }
        let (cell_a, cell_b) = self.cells.get_pair_mut(a, b).ok_or(Error::OutOfBounds(b))?;

        cell_a.set_wall(wall, present);
        cell_b.set_wall(wall.reverse(), present);
        Ok(())
    }

    /// Opens one outward facing wall of a border cell, trying `preferred`
    /// first. Returns the wall that was opened.
    pub fn open_border(&mut self, pos: Pos, preferred: Wall) -> Result<Wall> {
        let wall = self.border_wall(pos, preferred)?;
        self.cell_at_mut(pos)?.set_wall(wall, false);
        Ok(wall)
    }

    /// The wall [`Grid::open_border`] would open, without touching the grid.
    ///
    /// Outward walls that are already open are skipped unless no closed
    /// one is left.
    pub fn border_wall(&self, pos: Pos, preferred: Wall) -> Result<Wall> {
        let cell = self.cell_at(pos)?;
        let mut outward = std::iter::once(preferred)
            .chain([Wall::Top, Wall::Right, Wall::Bottom, Wall::Left])
            .filter(|&wall| !self.contains(pos + wall.offset()));

        // an outward wall that is still closed wins over one already opened
        let first = outward.next().ok_or(Error::NotOnBorder(pos))?;
        if cell.has_wall(first) {
            return Ok(first);
        }
        Ok(outward.find(|&wall| cell.has_wall(wall)).unwrap_or(first))
    }

    /// Number of interior wall pairs that are open.
    pub fn passage_count(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Wall::Right, Wall::Bottom]
                    .into_iter()
                    .filter(|&w| self.neighbor(pos, w).is_some() && self.cells[pos].is_open(w))
                    .count()
            })
            .sum()
    }

    /// `true` if every shared edge agrees on both sides.
    pub fn is_symmetric(&self) -> bool {
        self.positions().all(|pos| {
            [Wall::Right, Wall::Bottom].into_iter().all(|w| {
                self.neighbor(pos, w).map_or(true, |next| {
                    self.cells[pos].has_wall(w) == self.cells[next].has_wall(w.reverse())
                })
            })
        })
    }
}

impl fmt::Display for Grid {
    /// ASCII rendering, two characters per cell plus `+` corners.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let cell = &self.cells[Pos(row, col)];
                let top = if cell.has_wall(Wall::Top) { "--" } else { "  " };
                write!(f, "+{}", top)?;
            }
            writeln!(f, "+")?;

            for col in 0..self.cols() {
                let cell = &self.cells[Pos(row, col)];
                let left = if cell.has_wall(Wall::Left) { '|' } else { ' ' };
                write!(f, "{}  ", left)?;
            }
            let last = &self.cells[Pos(row, self.cols() - 1)];
            writeln!(f, "{}", if last.has_wall(Wall::Right) { '|' } else { ' ' })?;
        }

        for col in 0..self.cols() {
            let cell = &self.cells[Pos(self.rows() - 1, col)];
            let bottom = if cell.has_wall(Wall::Bottom) { "--" } else { "  " };
            write!(f, "+{}", bottom)?;
        }
        writeln!(f, "+")
    }
}
