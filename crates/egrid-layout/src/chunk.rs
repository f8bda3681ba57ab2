// ABOUTME: Row partitioning for grid content.
// ABOUTME: Splits an ordered slice into rows of a fixed column count.

/// Partition `items` into rows of `columns` elements.
///
/// Every row except the last holds exactly `columns` elements; the last row
/// holds the remainder. Order is preserved and nothing is dropped, so
/// concatenating the rows reproduces `items`. An empty slice yields no rows.
///
/// # Panics
///
/// Panics if `columns` is zero.
pub fn chunk<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    items.chunks(columns).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_fills_every_row() {
        let items = [1, 2, 3, 4];
        let rows = chunk(&items, 4);
        assert_eq!(rows, vec![&[1, 2, 3, 4][..]]);
    }

    #[test]
    fn four_items_split_across_two_columns() {
        let items = [1, 2, 3, 4];
        let rows = chunk(&items, 2);
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn remainder_lands_in_final_row() {
        let items = [1, 2, 3, 4, 5];
        let rows = chunk(&items, 2);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &[1, 2][..]);
        assert_eq!(rows[1], &[3, 4][..]);
        assert_eq!(rows[2], &[5][..]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let items: [u8; 0] = [];
        assert!(chunk(&items, 3).is_empty());
    }

    #[test]
    fn concatenated_rows_reproduce_input() {
        let items: Vec<u32> = (0..23).collect();
        let rows = chunk(&items, 7);
        assert_eq!(rows.len(), 23_usize.div_ceil(7));
        for row in &rows[..rows.len() - 1] {
            assert_eq!(row.len(), 7);
        }
        let rebuilt: Vec<u32> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(rebuilt, items);
    }
}
