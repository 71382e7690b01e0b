use std::{
    fmt,
    ops::{Add, Sub},
};

/// Grid position as `(row, col)`.
///
/// Components are signed, so stepping off the edge of the grid yields a
/// position that simply fails the bounds check instead of underflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos(pub i32, pub i32);

impl Pos {
    pub const ZERO: Pos = Pos(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    /// Manhattan length of the position treated as an offset.
    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// `true` if `other` differs by exactly one step along exactly one axis.
    pub fn is_adjacent(self, other: Pos) -> bool {
        (self - other).abs_sum() == 1
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, other: Pos) -> Pos {
        Pos(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((row, col): (i32, i32)) -> Self {
        Pos(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
