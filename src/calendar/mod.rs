mod grid;
pub use grid::*;
