use crate::pos::Pos;

#[derive(Debug, Clone)]
pub struct Cell {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
    pub visited: bool,
    pub(crate) pos: Pos,
}

impl Cell {
    /// Fully walled, unvisited cell.
    pub fn new(pos: Pos) -> Cell {
        Cell {
            top: true,
            bottom: true,
            left: true,
            right: true,
            visited: false,
            pos,
        }
    }

    pub fn has_wall(&self, wall: Wall) -> bool {
        match wall {
            Wall::Top => self.top,
            Wall::Bottom => self.bottom,
            Wall::Left => self.left,
            Wall::Right => self.right,
        }
    }

    pub fn is_open(&self, wall: Wall) -> bool {
        !self.has_wall(wall)
    }

    /// Only the grid may flip walls, so the neighbour can be kept in sync.
    pub(crate) fn set_wall(&mut self, wall: Wall, present: bool) {
        match wall {
            Wall::Top => self.top = present,
            Wall::Bottom => self.bottom = present,
            Wall::Left => self.left = present,
            Wall::Right => self.right = present,
        }
    }

    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        Wall::ALL.into_iter().filter(|&w| self.has_wall(w))
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

/// One side of a cell, doubling as the direction of the neighbour behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Right, Wall::Left];

    pub fn offset(self) -> Pos {
        match self {
            Wall::Top => Pos(-1, 0),
            Wall::Bottom => Pos(1, 0),
            Wall::Left => Pos(0, -1),
            Wall::Right => Pos(0, 1),
        }
    }

    pub fn reverse(self) -> Wall {
        match self {
            Wall::Top => Wall::Bottom,
            Wall::Bottom => Wall::Top,
            Wall::Left => Wall::Right,
            Wall::Right => Wall::Left,
        }
    }

    pub fn from_offset(offset: Pos) -> Option<Wall> {
        match offset {
            Pos(-1, 0) => Some(Wall::Top),
            Pos(1, 0) => Some(Wall::Bottom),
            Pos(0, -1) => Some(Wall::Left),
            Pos(0, 1) => Some(Wall::Right),
            _ => None,
        }
    }
}
