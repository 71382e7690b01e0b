use log::{log_enabled, trace, Level};
use mazecore::{observer::MazeObserver, Cell, Grid, Pos};

/// Pixel rectangle of a cell, corners inclusive.
///
/// Coordinates are `i64` and saturate, so huge layouts clamp instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rect {
    pub fn center(&self) -> (i64, i64) {
        (
            self.x1 + (self.x2 - self.x1) / 2,
            self.y1 + (self.y2 - self.y1) / 2,
        )
    }
}

/// Maps grid positions onto screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub origin: (i32, i32),
    pub cell_size: u32,
}

impl CellLayout {
    pub fn new(origin: (i32, i32), cell_size: u32) -> Self {
        Self { origin, cell_size }
    }

    pub fn rect(&self, pos: Pos) -> Rect {
        let size = i64::from(self.cell_size);
        let x1 = i64::from(self.origin.0).saturating_add(i64::from(pos.col()).saturating_mul(size));
        let y1 = i64::from(self.origin.1).saturating_add(i64::from(pos.row()).saturating_mul(size));
        Rect {
            x1,
            y1,
            x2: x1.saturating_add(size),
            y2: y1.saturating_add(size),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub updates: usize,
    pub moves: usize,
    pub undos: usize,
}

/// Observer that places every notification on the pixel layout and traces it.
///
/// There is no window behind it, so `tick` has nothing to pace.
pub struct LayoutObserver {
    layout: CellLayout,
    pub stats: Stats,
}

impl LayoutObserver {
    pub fn new(layout: CellLayout) -> Self {
        Self {
            layout,
            stats: Stats::default(),
        }
    }
}

impl MazeObserver for LayoutObserver {
    fn on_cell_updated(&mut self, cell: &Cell) {
        self.stats.updates += 1;
        if log_enabled!(Level::Trace) {
            let walls: Vec<_> = cell.walls().collect();
            trace!("redraw {:?} walls {:?}", self.layout.rect(cell.pos()), walls);
        }
    }

    fn on_move(&mut self, from: &Cell, to: &Cell, is_undo: bool) {
        if is_undo {
            self.stats.undos += 1;
        } else {
            self.stats.moves += 1;
        }

        if log_enabled!(Level::Trace) {
            let (a, b) = (
                self.layout.rect(from.pos()).center(),
                self.layout.rect(to.pos()).center(),
            );
            trace!("line {:?} -> {:?}{}", a, b, if is_undo { " (undo)" } else { "" });
        }
    }
}

/// ASCII maze with the cells of `path` marked.
pub fn draw_ascii(grid: &Grid, path: Option<&[Pos]>) -> String {
    let mut lines: Vec<Vec<char>> = grid.to_string().lines().map(|l| l.chars().collect()).collect();

    for pos in path.unwrap_or_default() {
        let (row, col) = (pos.row() as usize * 2 + 1, pos.col() as usize * 3 + 1);
        if let Some(line) = lines.get_mut(row) {
            for ch in line.iter_mut().skip(col).take(2) {
                *ch = '*';
            }
        }
    }

    lines
        .into_iter()
        .map(|l| l.into_iter().collect::<String>() + "\n")
        .collect()
}
