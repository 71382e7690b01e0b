use log::{debug, trace};
use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};

use super::Random;
use crate::{
    cell::Wall,
    error::Result,
    grid::Grid,
    observer::{MazeObserver, NoopObserver},
    pos::Pos,
};

/// Randomized depth-first carver.
///
/// Produces a perfect maze: every cell is reached exactly once, so the opened
/// passages form a spanning tree over the grid. Besides the tree, one
/// entrance and one exit wall on the border are opened.
#[derive(Debug, Clone)]
pub struct Generator {
    rng: Random,
    start: Pos,
    entrance: Pos,
    exit: Option<Pos>,
}

/// One level of the carve, equivalent to a recursive call that is still
/// working through its shuffled directions.
struct Frame {
    pos: Pos,
    dirs: [Wall; 4],
    next: usize,
}

impl Generator {
    pub fn new(rng: Random) -> Self {
        Self {
            rng,
            start: Pos::ZERO,
            entrance: Pos::ZERO,
            exit: None,
        }
    }

    /// Seeds the generator, drawing a fresh seed when none is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let seed: u64 = thread_rng().gen();
            debug!("no seed given, using {}", seed);
            seed
        });

        Self::new(Random::seed_from_u64(seed))
    }

    pub fn with_start(mut self, start: Pos) -> Self {
        self.start = start;
        self
    }

    pub fn with_entrance(mut self, entrance: Pos) -> Self {
        self.entrance = entrance;
        self
    }

    /// Exit cell, defaults to the bottom right corner of the grid.
    pub fn with_exit(mut self, exit: Pos) -> Self {
        self.exit = Some(exit);
        self
    }

    /// Carves `grid`, which is expected to be fully walled.
    ///
    /// Visited flags are cleared before and after the carve. Nothing is
    /// modified if the start, entrance or exit is invalid.
    pub fn generate(&mut self, grid: &mut Grid, observer: &mut impl MazeObserver) -> Result<()> {
        let exit = self.exit.unwrap_or_else(|| grid.last());
        grid.cell_at(self.start)?;
        grid.border_wall(self.entrance, Wall::Top)?;
        grid.border_wall(exit, Wall::Bottom)?;

        grid.open_border(self.entrance, Wall::Top)?;
        observer.on_cell_updated(grid.cell_at(self.entrance)?);
        grid.open_border(exit, Wall::Bottom)?;
        observer.on_cell_updated(grid.cell_at(exit)?);
        observer.tick();

        // flags left over from an earlier solve would read as carved cells
        grid.reset_visited();

        let mut carved = 0usize;
        let mut stack = Vec::with_capacity(grid.cell_count());
        stack.push(self.enter(grid, self.start)?);

        while let Some(frame) = stack.last_mut() {
            let Some(&wall) = frame.dirs.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            let current = frame.pos;

            let Some(next) = grid.neighbor(current, wall) else {
                continue;
            };
            if grid.cell_at(next)?.visited {
                continue;
            }

            grid.remove_wall_between(current, next)?;
            carved += 1;
            trace!("carved {} -> {}", current, next);

            observer.on_cell_updated(grid.cell_at(current)?);
            observer.on_cell_updated(grid.cell_at(next)?);
            observer.tick();

            let frame = self.enter(grid, next)?;
            stack.push(frame);
        }

        grid.reset_visited();
        debug!(
            "generated {}x{} maze, {} passages carved",
            grid.rows(),
            grid.cols(),
            carved
        );

        Ok(())
    }

    fn enter(&mut self, grid: &mut Grid, pos: Pos) -> Result<Frame> {
        grid.cell_at_mut(pos)?.visited = true;

        let mut dirs = Wall::ALL;
        dirs.shuffle(&mut self.rng);
        Ok(Frame { pos, dirs, next: 0 })
    }
}

/// Carves `grid` from `start` with a generator seeded by `seed`.
pub fn generate(grid: &mut Grid, start: Pos, seed: u64) -> Result<()> {
    Generator::from_seed(Some(seed))
        .with_start(start)
        .generate(grid, &mut NoopObserver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, observer::EventLog};

    fn reachable_from_origin(grid: &Grid) -> usize {
        let mut seen = vec![Pos::ZERO];
        let mut stack = vec![Pos::ZERO];
        while let Some(pos) = stack.pop() {
            for wall in Wall::ALL {
                let Some(next) = grid.neighbor(pos, wall) else {
                    continue;
                };
                if grid.cell_at(pos).unwrap().is_open(wall) && !seen.contains(&next) {
                    seen.push(next);
                    stack.push(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn carves_spanning_tree() {
        for (rows, cols, seed) in [(1, 7, 1), (7, 1, 2), (10, 12, 3), (25, 25, 4), (3, 40, 5)] {
            let mut grid = Grid::new(rows, cols).unwrap();
            generate(&mut grid, Pos::ZERO, seed).unwrap();

            assert_eq!(grid.passage_count(), (rows * cols - 1) as usize, "\n{}", grid);
            assert_eq!(reachable_from_origin(&grid), (rows * cols) as usize, "\n{}", grid);
            assert!(grid.is_symmetric());
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(15, 9).unwrap();
        let mut b = Grid::new(15, 9).unwrap();
        let (mut log_a, mut log_b) = (EventLog::new(), EventLog::new());

        Generator::from_seed(Some(42)).generate(&mut a, &mut log_a).unwrap();
        Generator::from_seed(Some(42)).generate(&mut b, &mut log_b).unwrap();

        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(log_a.events, log_b.events);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        generate(&mut a, Pos::ZERO, 1).unwrap();
        generate(&mut b, Pos::ZERO, 2).unwrap();
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn opens_entrance_and_exit() {
        let mut grid = Grid::new(10, 12).unwrap();
        generate(&mut grid, Pos::ZERO, 7).unwrap();

        assert!(grid.cell_at(Pos(0, 0)).unwrap().is_open(Wall::Top));
        assert!(grid.cell_at(Pos(9, 11)).unwrap().is_open(Wall::Bottom));

        // the other border walls of both corners are never forced open
        assert!(grid.cell_at(Pos(0, 0)).unwrap().has_wall(Wall::Left));
        assert!(grid.cell_at(Pos(9, 11)).unwrap().has_wall(Wall::Right));
    }

    #[test]
    fn single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        generate(&mut grid, Pos::ZERO, 0).unwrap();

        let cell = grid.cell_at(Pos::ZERO).unwrap();
        assert!(cell.is_open(Wall::Top));
        assert!(cell.is_open(Wall::Bottom));
        assert!(cell.has_wall(Wall::Left));
        assert!(cell.has_wall(Wall::Right));
        assert!(!cell.visited);
    }

    #[test]
    fn clears_visited_when_done() {
        let mut grid = Grid::new(6, 6).unwrap();
        generate(&mut grid, Pos(3, 3), 11).unwrap();
        assert!(grid.cells().all(|c| !c.visited));
        assert_eq!(reachable_from_origin(&grid), 36);
    }

    #[test]
    fn ignores_leftover_visited_flags() {
        let mut grid = Grid::new(5, 5).unwrap();
        for pos in [Pos(0, 1), Pos(1, 0), Pos(3, 3)] {
            grid.cell_at_mut(pos).unwrap().visited = true;
        }

        generate(&mut grid, Pos::ZERO, 1).unwrap();
        assert_eq!(grid.passage_count(), 24, "\n{}", grid);
        assert_eq!(reachable_from_origin(&grid), 25);
    }

    #[test]
    fn same_cell_entrance_and_exit() {
        let mut grid = Grid::new(3, 3).unwrap();
        Generator::from_seed(Some(2))
            .with_exit(Pos::ZERO)
            .generate(&mut grid, &mut NoopObserver)
            .unwrap();

        let cell = grid.cell_at(Pos::ZERO).unwrap();
        assert!(cell.is_open(Wall::Top));
        assert!(cell.is_open(Wall::Left));
        assert_eq!(grid.passage_count(), 8);
    }

    #[test]
    fn notifies_both_carved_cells() {
        let mut grid = Grid::new(4, 5).unwrap();
        let mut log = EventLog::new();
        Generator::from_seed(Some(9)).generate(&mut grid, &mut log).unwrap();

        // entrance + exit, then two cells for every carved passage
        assert_eq!(log.updated_cells().count(), 2 + 2 * 19);
        assert_eq!(log.ticks(), 1 + 19);
        assert!(log.moves().next().is_none());
    }

    #[test]
    fn custom_endpoints() {
        let mut grid = Grid::new(5, 5).unwrap();
        Generator::from_seed(Some(3))
            .with_entrance(Pos(2, 0))
            .with_exit(Pos(0, 4))
            .generate(&mut grid, &mut NoopObserver)
            .unwrap();

        assert!(grid.cell_at(Pos(2, 0)).unwrap().is_open(Wall::Left));
        assert!(grid.cell_at(Pos(0, 4)).unwrap().is_open(Wall::Top));
        assert_eq!(grid.passage_count(), 24);
    }

    #[test]
    fn invalid_endpoints_leave_grid_untouched() {
        let mut grid = Grid::new(5, 5).unwrap();
        let err = Generator::from_seed(Some(3))
            .with_exit(Pos(2, 2))
            .generate(&mut grid, &mut NoopObserver)
            .unwrap_err();
        assert_eq!(err, Error::NotOnBorder(Pos(2, 2)));

        let err = Generator::from_seed(Some(3))
            .with_start(Pos(5, 0))
            .generate(&mut grid, &mut NoopObserver)
            .unwrap_err();
        assert_eq!(err, Error::OutOfBounds(Pos(5, 0)));

        assert!(grid.cells().all(|c| c.walls().count() == 4));
    }

    #[test]
    fn large_grid_does_not_overflow_stack() {
        let mut grid = Grid::new(400, 400).unwrap();
        generate(&mut grid, Pos::ZERO, 5).unwrap();
        assert_eq!(grid.passage_count(), 400 * 400 - 1);
    }
}
