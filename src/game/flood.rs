use crate::game::board::Board;

/// Recolors the 4-connected region holding the origin's index to `target`.
///
/// Returns the number of cells rewritten. Uses an explicit worklist, so
/// board size never bounds the call stack.
pub fn flood_origin(board: &mut Board, target: usize) -> usize {
    let source = board.origin();
    if source == target {
        return 0;
    }

    let size = board.size();
    let mut filled = 0;
    let mut stack = vec![(0usize, 0usize)];

    while let Some((x, y)) = stack.pop() {
        if board.cell(x, y) != source {
            continue;
        }
        board.set(x, y, target);
        filled += 1;

        // Orthogonal neighbors only; off-board positions are skipped
        if x + 1 < size {
            stack.push((x + 1, y));
        }
        if x > 0 {
            stack.push((x - 1, y));
        }
        if y + 1 < size {
            stack.push((x, y + 1));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[usize]]) -> Board {
        Board::from_rows(rows, 6).unwrap()
    }

    #[test]
    fn partial_flood_stops_at_region_boundary() {
        let mut b = board(&[&[0, 0, 1], &[0, 1, 1], &[1, 1, 2]]);

        assert_eq!(flood_origin(&mut b, 1), 3);
        assert_eq!(b, board(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 2]]));
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let mut b = board(&[&[0, 1], &[1, 0]]);

        assert_eq!(flood_origin(&mut b, 1), 1);
        assert_eq!(b, board(&[&[1, 1], &[1, 0]]));
    }

    #[test]
    fn same_color_is_left_untouched() {
        let mut b = board(&[&[2, 0], &[0, 2]]);
        let before = b.clone();

        assert_eq!(flood_origin(&mut b, 2), 0);
        assert_eq!(b, before);
    }

    #[test]
    fn winding_region_is_followed_through_every_turn() {
        // A snake of 0s that doubles back on itself
        let mut b = board(&[
            &[0, 0, 0, 0],
            &[3, 3, 3, 0],
            &[0, 0, 0, 0],
            &[0, 3, 3, 3],
        ]);

        assert_eq!(flood_origin(&mut b, 5), 10);
        assert_eq!(
            b,
            board(&[
                &[5, 5, 5, 5],
                &[3, 3, 3, 5],
                &[5, 5, 5, 5],
                &[5, 3, 3, 3],
            ])
        );
    }

    #[test]
    fn full_board_flood_visits_every_cell() {
        let mut b = Board::from_rows(&vec![&[4usize; 14][..]; 14], 6).unwrap();

        assert_eq!(flood_origin(&mut b, 0), 196);
        assert!(b.is_uniform());
        assert_eq!(b.origin(), 0);
    }
}
