use rand::Rng;

use crate::error::GameError;

/// Square grid of palette indices, stored row-major.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row; the
/// origin `(0, 0)` is the top-left cell.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<usize>,
}

impl Board {
    /// Builds a `size`×`size` board with every cell drawn uniformly from
    /// `0..colors`.
    pub fn random<R: Rng + ?Sized>(size: usize, colors: usize, rng: &mut R) -> Self {
        let mut board = Self { size, cells: vec![0; size * size] };
        board.randomize(colors, rng);
        board
    }

    /// Builds a board from explicit rows, top row first.
    pub fn from_rows(rows: &[&[usize]], colors: usize) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::MalformedBoard { reason: "board has no rows".into() });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::MalformedBoard {
                    reason: format!("row {} has {} cells, expected {}", y, row.len(), size),
                });
            }
            if let Some(&index) = row.iter().find(|&&index| index >= colors) {
                return Err(GameError::MalformedBoard {
                    reason: format!("row {} holds palette index {} (palette has {} colors)", y, index, colors),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    // Refills in place; storage is reused across games
    pub fn randomize<R: Rng + ?Sized>(&mut self, colors: usize, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_range(0..colors);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Palette index at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    pub fn cell(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({}, {}) is outside a {}x{} board",
            x, y, self.size, self.size
        );
        self.cells[y * self.size + x]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(self.cells[y * self.size + x])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, index: usize) {
        self.cells[y * self.size + x] = index;
    }

    pub fn origin(&self) -> usize {
        self.cells[0]
    }

    pub fn is_uniform(&self) -> bool {
        let first = self.origin();
        self.cells.iter().all(|&cell| cell == first)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_board_stays_in_palette_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::random(14, 6, &mut rng);

        assert_eq!(board.size(), 14);
        assert_eq!(board.rows().count(), 14);
        assert!(board.rows().flatten().all(|&cell| cell < 6));
    }

    #[test]
    fn randomize_reuses_the_same_dimensions() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut board = Board::random(5, 6, &mut rng);
        let before = board.clone();

        board.randomize(6, &mut rng);
        assert_eq!(board.size(), 5);
        assert_ne!(board, before);
    }

    #[test]
    fn from_rows_is_column_x_row_y() {
        let board = Board::from_rows(&[&[0, 1], &[2, 3]], 6).unwrap();

        assert_eq!(board.cell(0, 0), 0);
        assert_eq!(board.cell(1, 0), 1);
        assert_eq!(board.cell(0, 1), 2);
        assert_eq!(board.cell(1, 1), 3);
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.get(0, 2), None);
    }

    #[test]
    fn from_rows_rejects_ragged_and_out_of_range_input() {
        assert!(matches!(
            Board::from_rows(&[&[0, 1], &[0]], 6),
            Err(GameError::MalformedBoard { .. })
        ));
        assert!(matches!(
            Board::from_rows(&[&[0, 6], &[0, 0]], 6),
            Err(GameError::MalformedBoard { .. })
        ));
        assert!(matches!(Board::from_rows(&[], 6), Err(GameError::MalformedBoard { .. })));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn cell_panics_outside_the_board() {
        let board = Board::from_rows(&[&[0]], 6).unwrap();
        board.cell(1, 0);
    }

    #[test]
    fn uniform_detection() {
        assert!(Board::from_rows(&[&[3, 3], &[3, 3]], 6).unwrap().is_uniform());
        assert!(!Board::from_rows(&[&[3, 3], &[3, 2]], 6).unwrap().is_uniform());
    }
}
