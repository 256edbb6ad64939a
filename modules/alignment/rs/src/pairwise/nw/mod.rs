pub use engine::Engine;
pub use matrix::{Layout, Matrices, Matrix};
pub use trace::Trace;

mod algo;
mod engine;
mod matrix;
mod trace;
mod traceback;

// Needleman-Wunsch runs in three sequential phases, each owning nothing but the matrices of the current run:
// 1. matrix::Matrices::new - allocate both grids and score/tag the first row and column;
// 2. algo::fill - score every interior cell and record the winning predecessor move;
// 3. traceback::traceback - walk the recorded moves back from the last cell to the origin.
