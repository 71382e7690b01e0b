mod backtracker;
mod solver;

pub use backtracker::{generate, Generator};
pub use solver::{solve, Solver, SEARCH_ORDER};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;
