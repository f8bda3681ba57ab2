// ABOUTME: The grid arranger.
// ABOUTME: Sizes cells uniformly and composes rows of children into a layout tree.

use std::ops::Range;

use egrid_core::{Axis, GridConfig, Size};

use crate::chunk::chunk;
use crate::compositor::Compositor;

/// Compute the uniform cell size for a grid.
///
/// Every cell shares one size regardless of content:
/// `(container - spacing * (count - 1)) / count` per axis. The result is
/// exactly what the arithmetic produces: oversized spacing yields negative
/// cells, and zero rows or columns yield non-finite ones. Callers that need
/// well-formed geometry guard their inputs.
pub fn cell_size(
    container: Size,
    rows: usize,
    columns: usize,
    column_spacing: f32,
    row_spacing: f32,
) -> Size {
    Size {
        width: (container.width - column_spacing * (columns as f32 - 1.0)) / columns as f32,
        height: (container.height - row_spacing * (rows as f32 - 1.0)) / rows as f32,
    }
}

/// A fixed-column grid of opaque child elements.
///
/// Holds the configuration and the ordered children. Every layout pass
/// re-derives its output from the container size the host measured, so a
/// resized container only needs [`GridView::compose`] called again.
#[derive(Debug, Clone)]
pub struct GridView<T> {
    config: GridConfig,
    children: Vec<T>,
}

/// One layout pass's geometry: the rows and the size shared by every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement<'a, T> {
    pub cell: Size,
    pub rows: Vec<&'a [T]>,
}

impl<T> GridView<T> {
    /// A grid over an explicit, pre-built child sequence.
    pub fn new(config: GridConfig, children: Vec<T>) -> Self {
        Self { config, children }
    }

    /// Build one child per item of an ordered collection.
    ///
    /// Keyed collections flatten the same way: the arranger never observes
    /// identity, so a key extractor would have no layout effect.
    pub fn from_iter<I, F>(config: GridConfig, items: I, view: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> T,
    {
        let children = items.into_iter().map(view).collect();
        Self { config, children }
    }

    /// Build one child per index of a range.
    pub fn from_range<F>(config: GridConfig, range: Range<usize>, view: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::from_iter(config, range, view)
    }

    /// Fill `rows` full rows cell by cell via a (row, column) generator.
    pub fn from_cells<F>(config: GridConfig, rows: usize, mut view: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let columns = config.columns;
        let children = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| (row, column)))
            .map(|(row, column)| view(row, column))
            .collect();
        Self { config, children }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn children(&self) -> &[T] {
        &self.children
    }

    /// The children chunked into rows of `columns` elements.
    ///
    /// # Panics
    ///
    /// Panics if the configured column count is zero.
    pub fn rows(&self) -> Vec<&[T]> {
        chunk(&self.children, self.config.columns)
    }

    /// Chunk the children and size the cells for `container`.
    ///
    /// Pure in its inputs; call again whenever the host re-measures the
    /// container.
    pub fn arrangement(&self, container: Size) -> Arrangement<'_, T> {
        let rows = self.rows();
        let cell = cell_size(
            container,
            rows.len(),
            self.config.columns,
            self.config.column_spacing.unwrap_or(0.0),
            self.config.row_spacing.unwrap_or(0.0),
        );
        Arrangement { cell, rows }
    }

    /// Compose the grid into the host's layout tree.
    ///
    /// Rows become horizontal stacks of max-framed cells, the rows stack
    /// vertically, and the whole grid is pinned to `container`. The cell
    /// size is a ceiling, not a floor: children smaller than a cell stay
    /// smaller, and the host's own alignment rules place them within it.
    pub fn compose<H>(&self, host: &mut H, container: Size) -> H::Node
    where
        H: Compositor<Node = T>,
        T: Clone,
    {
        let column_spacing = self.config.column_spacing.unwrap_or(0.0);
        let row_spacing = self.config.row_spacing.unwrap_or(0.0);
        let arrangement = self.arrangement(container);

        tracing::trace!(
            rows = arrangement.rows.len(),
            columns = self.config.columns,
            cell_width = arrangement.cell.width,
            cell_height = arrangement.cell.height,
            "arranged grid"
        );

        let row_nodes = arrangement
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .iter()
                    .map(|child| host.max_frame(child.clone(), arrangement.cell))
                    .collect();
                host.stack(
                    Axis::Horizontal,
                    column_spacing,
                    self.config.column_alignment,
                    cells,
                )
            })
            .collect();

        let grid = host.stack(
            Axis::Vertical,
            row_spacing,
            self.config.row_alignment,
            row_nodes,
        );
        host.fixed_frame(grid, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: f32, height: f32) -> Size {
        Size::new(width, height)
    }

    #[test]
    fn cell_size_divides_container_evenly() {
        let cell = cell_size(size(400.0, 200.0), 1, 4, 0.0, 0.0);
        assert_eq!(cell, size(100.0, 200.0));
    }

    #[test]
    fn cell_size_subtracts_inter_column_spacing() {
        let cell = cell_size(size(410.0, 200.0), 1, 4, 10.0, 0.0);
        assert_eq!(cell, size(95.0, 200.0));
    }

    #[test]
    fn cell_size_subtracts_inter_row_spacing() {
        let cell = cell_size(size(100.0, 130.0), 3, 1, 0.0, 5.0);
        assert_eq!(cell, size(100.0, 40.0));
    }

    #[test]
    fn cell_size_scales_linearly_with_container() {
        let small = cell_size(size(300.0, 120.0), 3, 5, 0.0, 0.0);
        let large = cell_size(size(600.0, 240.0), 3, 5, 0.0, 0.0);
        assert_eq!(large.width, small.width * 2.0);
        assert_eq!(large.height, small.height * 2.0);
    }

    #[test]
    fn oversized_spacing_is_not_clamped() {
        let cell = cell_size(size(100.0, 50.0), 1, 2, 120.0, 0.0);
        assert_eq!(cell.width, -10.0);
    }

    #[test]
    fn absent_spacing_matches_zero_spacing() {
        let bare = GridView::new(GridConfig::new(2), vec![0; 4]);
        let spaced = GridView::new(
            GridConfig::new(2).column_spacing(0.0).row_spacing(0.0),
            vec![0; 4],
        );
        let container = size(200.0, 100.0);
        assert_eq!(
            bare.arrangement(container).cell,
            spaced.arrangement(container).cell
        );
    }

    #[test]
    fn four_children_in_four_columns_make_one_row() {
        let grid = GridView::new(GridConfig::new(4), vec![1, 2, 3, 4]);
        let rows = grid.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 4);
    }

    #[test]
    fn four_children_in_two_columns_make_two_rows() {
        let grid = GridView::new(GridConfig::new(2), vec![1, 2, 3, 4]);
        let rows = grid.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn five_children_in_two_columns_leave_a_remainder_row() {
        let grid = GridView::new(GridConfig::new(2), vec![1, 2, 3, 4, 5]);
        let lengths: Vec<usize> = grid.rows().iter().map(|row| row.len()).collect();
        assert_eq!(lengths, vec![2, 2, 1]);
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid: GridView<u8> = GridView::new(GridConfig::new(3), Vec::new());
        assert!(grid.rows().is_empty());
    }

    #[test]
    fn from_iter_preserves_collection_order() {
        let names = ["a", "b", "c"];
        let grid = GridView::from_iter(GridConfig::new(2), names, str::to_owned);
        assert_eq!(grid.children(), &["a", "b", "c"]);
    }

    #[test]
    fn from_range_preserves_order() {
        let grid = GridView::from_range(GridConfig::new(3), 0..5, |i| i * 10);
        assert_eq!(grid.children(), &[0, 10, 20, 30, 40]);
    }

    #[test]
    fn from_cells_fills_row_major() {
        let grid = GridView::from_cells(GridConfig::new(2), 2, |row, column| (row, column));
        assert_eq!(grid.children(), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn arrangement_is_reproducible() {
        let grid = GridView::from_range(GridConfig::new(3), 0..7, |i| i);
        let container = size(300.0, 300.0);
        assert_eq!(grid.arrangement(container), grid.arrangement(container));
    }
}
