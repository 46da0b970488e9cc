//! Cell filtering: keep only cells with an even value.

use crate::types::{Grid, GridCell};

/// Whether a cell is painted.
#[must_use]
pub const fn is_painted(cell: GridCell) -> bool {
    cell.value % 2 == 0
}

/// Drop every odd-valued cell.
///
/// Relative order and each cell's original `index` are preserved; the
/// result is NOT re-indexed, since pixel mapping recovers row and column
/// from the index.
#[must_use]
pub fn filter_cells(grid: &Grid) -> Grid {
    grid.iter().copied().filter(|&cell| is_painted(cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::types::HashBytes;

    fn username_grid() -> Grid {
        build_grid(&HashBytes::new([
            20, 196, 176, 107, 130, 78, 197, 147, 35, 147, 98, 81, 127, 83, 139, 41,
        ]))
    }

    #[test]
    fn username_filtered_matches_fixture() {
        let expected = vec![
            GridCell::new(20, 0),
            GridCell::new(196, 1),
            GridCell::new(176, 2),
            GridCell::new(196, 3),
            GridCell::new(20, 4),
            GridCell::new(130, 6),
            GridCell::new(78, 7),
            GridCell::new(130, 8),
            GridCell::new(98, 16),
            GridCell::new(98, 18),
        ];
        assert_eq!(filter_cells(&username_grid()).into_cells(), expected);
    }

    #[test]
    fn indices_are_not_compacted() {
        let filtered = filter_cells(&username_grid());
        let indices: Vec<u32> = filtered.iter().map(|c| c.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 6, 7, 8, 16, 18]);
        // Re-indexing would make the last cell index 9.
        assert_ne!(indices.last(), Some(&9));
    }

    #[test]
    fn zero_is_retained() {
        let grid = Grid::new(vec![GridCell::new(0, 0), GridCell::new(1, 1)]);
        assert_eq!(filter_cells(&grid).cells(), [GridCell::new(0, 0)]);
    }

    #[test]
    fn retained_are_even_and_dropped_are_odd() {
        let grid = username_grid();
        let filtered = filter_cells(&grid);
        assert!(filtered.iter().all(|c| c.value % 2 == 0));
        for cell in &grid {
            let kept = filtered.iter().any(|c| c.index == cell.index);
            assert_eq!(kept, cell.value % 2 == 0, "cell {cell:?}");
        }
    }

    #[test]
    fn all_odd_grid_filters_to_empty() {
        let grid = build_grid(&HashBytes::new([1; 16]));
        assert!(filter_cells(&grid).is_empty());
    }
}
