//! Perfect maze generation with a randomized depth-first carver, and
//! depth-first solving of the carved grid.
//!
//! ```
//! use mazecore::{algorithms::{Generator, Solver}, observer::NoopObserver, Grid};
//!
//! let mut grid = Grid::new(10, 12)?;
//! Generator::from_seed(Some(7)).generate(&mut grid, &mut NoopObserver)?;
//! assert!(Solver::new().solve(&mut grid, &mut NoopObserver)?);
//! # Ok::<(), mazecore::Error>(())
//! ```

pub mod algorithms;
pub mod array;
pub mod cell;
pub mod error;
pub mod grid;
pub mod observer;
pub mod pos;

pub use cell::{Cell, Wall};
pub use error::{Error, Result};
pub use grid::Grid;
pub use pos::Pos;
