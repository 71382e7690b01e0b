use std::ops;

use crate::pos::Pos;

/// Row-major 2D storage addressed by [`Pos`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Pos) -> T) -> Self {
        let mut buf = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                buf.push(f(Pos(row as i32, col as i32)));
            }
        }

        Self { buf, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn pos_to_idx(&self, pos: Pos) -> Option<usize> {
        let Pos(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_pos(&self, idx: usize) -> Option<Pos> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Pos((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    /// Mutable access to two distinct cells at once.
    pub fn get_pair_mut(&mut self, a: Pos, b: Pos) -> Option<(&mut T, &mut T)> {
        let (ia, ib) = (self.pos_to_idx(a)?, self.pos_to_idx(b)?);
        if ia == ib {
            return None;
        }

        if ia < ib {
            let (lo, hi) = self.buf.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else {
            let (lo, hi) = self.buf.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_pos(i))
    }
}

impl<T> ops::Index<Pos> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Pos> for Array2D<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let arr = Array2D::from_fn(2, 3, |Pos(r, c)| r * 10 + c);
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 10, 11, 12]);
        assert_eq!(arr.pos_to_idx(Pos(1, 0)), Some(3));
        assert_eq!(arr.idx_to_pos(5), Some(Pos(1, 2)));
        assert_eq!(arr[Pos(1, 1)], 11);
    }

    #[test]
    fn out_of_bounds() {
        let arr = Array2D::from_fn(2, 2, |_| ());
        assert!(arr.get(Pos(-1, 0)).is_none());
        assert!(arr.get(Pos(0, 2)).is_none());
        assert!(arr.get(Pos(2, 0)).is_none());
        assert!(arr.idx_to_pos(4).is_none());
    }

    #[test]
    fn pair_mut_in_either_order() {
        let mut arr = Array2D::from_fn(1, 3, |Pos(_, c)| c);
        {
            let (a, b) = arr.get_pair_mut(Pos(0, 2), Pos(0, 0)).unwrap();
            std::mem::swap(a, b);
        }
        assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [2, 1, 0]);
        assert!(arr.get_pair_mut(Pos(0, 1), Pos(0, 1)).is_none());
    }
}
