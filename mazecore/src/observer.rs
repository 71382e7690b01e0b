use crate::{cell::Cell, pos::Pos};

/// Receives progress notifications from the generator and the solver.
///
/// All methods default to no-ops. The observer is only borrowed for the
/// duration of a single `generate` or `solve` call.
pub trait MazeObserver {
    /// Wall state of `cell` changed.
    fn on_cell_updated(&mut self, _cell: &Cell) {}

    /// Solver stepped from `from` to `to`, or backed out of `to` when `is_undo`.
    fn on_move(&mut self, _from: &Cell, _to: &Cell, _is_undo: bool) {}

    /// Pacing hook, called after each batch of updates or each move.
    fn tick(&mut self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MazeObserver for NoopObserver {}

impl<O: MazeObserver + ?Sized> MazeObserver for &mut O {
    fn on_cell_updated(&mut self, cell: &Cell) {
        (**self).on_cell_updated(cell)
    }

    fn on_move(&mut self, from: &Cell, to: &Cell, is_undo: bool) {
        (**self).on_move(from, to, is_undo)
    }

    fn tick(&mut self) {
        (**self).tick()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CellUpdated(Pos),
    Move { from: Pos, to: Pos, undo: bool },
    Tick,
}

/// Observer that records every notification in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> impl Iterator<Item = (Pos, Pos, bool)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            Event::Move { from, to, undo } => Some((from, to, undo)),
            _ => None,
        })
    }

    pub fn updated_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.events.iter().filter_map(|e| match *e {
            Event::CellUpdated(pos) => Some(pos),
            _ => None,
        })
    }

    pub fn ticks(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, Event::Tick)).count()
    }
}

impl MazeObserver for EventLog {
    fn on_cell_updated(&mut self, cell: &Cell) {
        self.events.push(Event::CellUpdated(cell.pos()));
    }

    fn on_move(&mut self, from: &Cell, to: &Cell, is_undo: bool) {
        self.events.push(Event::Move {
            from: from.pos(),
            to: to.pos(),
            undo: is_undo,
        });
    }

    fn tick(&mut self) {
        self.events.push(Event::Tick);
    }
}
