//! Grid construction: expand the digest into a left-right symmetric 5×5
//! grid of indexed cells.
//!
//! The digest is read in chunks of three bytes. Each chunk `[a, b, c]`
//! becomes the row `[a, b, c, b, a]`, so every row mirrors around its
//! middle column. Sixteen bytes give five full chunks; the last byte is
//! never used.

use crate::types::{CELL_COUNT, Grid, GridCell, HashBytes};

/// Number of digest bytes that seed one row.
const CHUNK_LEN: usize = 3;

/// Mirror a three-byte chunk into a five-value row.
#[must_use]
pub const fn mirror_row(chunk: [u8; CHUNK_LEN]) -> [u8; 5] {
    let [a, b, c] = chunk;
    [a, b, c, b, a]
}

/// Build the full 25-cell grid from a digest.
///
/// Cells are indexed by their position in the flattened row-major
/// sequence; the index is the only link back to a row and column once
/// cells start being dropped.
#[must_use]
pub fn build_grid(hash: &HashBytes) -> Grid {
    let mut cells = Vec::with_capacity(CELL_COUNT);
    for chunk in hash.as_bytes().chunks_exact(CHUNK_LEN) {
        let row = mirror_row([chunk[0], chunk[1], chunk[2]]);
        for value in row {
            // At most 25 cells, so the index always fits.
            #[allow(clippy::cast_possible_truncation)]
            let index = cells.len() as u32;
            cells.push(GridCell::new(value, index));
        }
    }
    Grid::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    const USERNAME: [u8; 16] = [
        20, 196, 176, 107, 130, 78, 197, 147, 35, 147, 98, 81, 127, 83, 139, 41,
    ];

    #[test]
    fn mirror_row_is_palindrome() {
        let row = mirror_row([1, 2, 3]);
        assert_eq!(row, [1, 2, 3, 2, 1]);
        let mut reversed = row;
        reversed.reverse();
        assert_eq!(row, reversed);
    }

    #[test]
    fn grid_has_twenty_five_cells() {
        let grid = build_grid(&HashBytes::new([0; 16]));
        assert_eq!(grid.len(), CELL_COUNT);
    }

    #[test]
    fn indices_are_sequential_from_zero() {
        let grid = build_grid(&HashBytes::new(USERNAME));
        for (position, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index as usize, position);
        }
    }

    #[test]
    fn username_grid_matches_fixture() {
        let expected: Vec<GridCell> = [
            20, 196, 176, 196, 20, 107, 130, 78, 130, 107, 197, 147, 35, 147, 197, 147, 98, 81,
            98, 147, 127, 83, 139, 83, 127,
        ]
        .into_iter()
        .zip(0..)
        .map(|(value, index)| GridCell::new(value, index))
        .collect();
        assert_eq!(build_grid(&HashBytes::new(USERNAME)).cells(), expected);
    }

    #[test]
    fn every_row_mirrors() {
        let grid = build_grid(&HashBytes::new(USERNAME));
        for row in grid.cells().chunks(GRID_SIZE as usize) {
            let values: Vec<u8> = row.iter().map(|c| c.value).collect();
            let mut reversed = values.clone();
            reversed.reverse();
            assert_eq!(values, reversed);
        }
    }

    #[test]
    fn last_digest_byte_is_unused() {
        let mut a = USERNAME;
        let mut b = USERNAME;
        a[15] = 0;
        b[15] = 255;
        assert_eq!(build_grid(&HashBytes::new(a)), build_grid(&HashBytes::new(b)));
    }
}
