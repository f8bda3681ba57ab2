// ABOUTME: Grid arrangement for the even-grid workspace.
// ABOUTME: Chunks children into rows, sizes cells uniformly, and composes layout trees.

mod chunk;
mod compositor;
mod grid;
mod tree;

pub use chunk::chunk;
pub use compositor::Compositor;
pub use grid::{cell_size, Arrangement, GridView};
pub use tree::{resolve, Element, TreeCompositor};
