use log::debug;

use crate::{
    cell::Wall,
    error::Result,
    grid::Grid,
    observer::{MazeObserver, NoopObserver},
    pos::Pos,
};

/// Directions tried from every cell: east, south, west, north.
pub const SEARCH_ORDER: [Wall; 4] = [Wall::Right, Wall::Bottom, Wall::Left, Wall::Top];

/// Depth-first path finder.
///
/// Finds *a* path through open passages, not necessarily the shortest one.
/// Cells stay visited after a dead end is abandoned, so each cell is
/// entered at most once.
#[derive(Debug, Default, Clone, Copy)]
pub struct Solver {
    start: Option<Pos>,
    end: Option<Pos>,
}

struct Frame {
    pos: Pos,
    next: usize,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: Pos) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: Pos) -> Self {
        self.end = Some(end);
        self
    }

    pub fn solve(&self, grid: &mut Grid, observer: &mut impl MazeObserver) -> Result<bool> {
        Ok(self.find_path(grid, observer)?.is_some())
    }

    /// Searches from start to end and returns the path, both ends included.
    ///
    /// `Ok(None)` means the two cells are not connected. Visited flags are
    /// cleared before the search and left set afterwards.
    pub fn find_path(
        &self,
        grid: &mut Grid,
        observer: &mut impl MazeObserver,
    ) -> Result<Option<Vec<Pos>>> {
        let start = self.start.unwrap_or(Pos::ZERO);
        let end = self.end.unwrap_or_else(|| grid.last());
        grid.cell_at(end)?;

        grid.reset_visited();
        grid.cell_at_mut(start)?.visited = true;
        if start == end {
            return Ok(Some(vec![start]));
        }

        let (mut moves, mut undos) = (0usize, 0usize);
        let mut stack = vec![Frame { pos: start, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let current = frame.pos;
            let Some(&wall) = SEARCH_ORDER.get(frame.next) else {
                stack.pop();
                if let Some(parent) = stack.last() {
                    undos += 1;
                    observer.on_move(grid.cell_at(parent.pos)?, grid.cell_at(current)?, true);
                    observer.tick();
                }
                continue;
            };
            frame.next += 1;

            if grid.cell_at(current)?.has_wall(wall) {
                continue;
            }
            let Some(next) = grid.neighbor(current, wall) else {
                continue;
            };
            let cell = grid.cell_at_mut(next)?;
            if cell.visited {
                continue;
            }
            cell.visited = true;

            moves += 1;
            observer.on_move(grid.cell_at(current)?, grid.cell_at(next)?, false);
            observer.tick();

            if next == end {
                debug!("reached {} after {} moves, {} undone", end, moves, undos);
                let path = stack.iter().map(|f| f.pos).chain([next]).collect();
                return Ok(Some(path));
            }

            stack.push(Frame { pos: next, next: 0 });
        }

        debug!("no path from {} to {}, {} moves tried", start, end, moves);
        Ok(None)
    }
}

/// Runs a depth-first search from `start` to `end` without an observer.
pub fn solve(grid: &mut Grid, start: Pos, end: Pos) -> Result<bool> {
    Solver::new()
        .with_start(start)
        .with_end(end)
        .solve(grid, &mut NoopObserver)
}
