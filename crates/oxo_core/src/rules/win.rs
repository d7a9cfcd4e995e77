//! Win detection.

use crate::{Board, Cell, Position, Symbol};
use tracing::instrument;

/// The eight lines, in evaluation order: rows, columns, diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line in [`WIN_LINES`] order with its symbol.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Symbol, [Position; 3])> {
    WIN_LINES.into_iter().find_map(|line @ [a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (Cell::Marked(x), Cell::Marked(y), Cell::Marked(z)) if x == y && y == z => {
                Some((x, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(symbol, _)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_symbols() {
        for symbol in [Symbol::Circle, Symbol::Cross] {
            for line in WIN_LINES {
                let mut cells = [Cell::Empty; 9];
                for pos in line {
                    cells[pos.to_index()] = Cell::Marked(symbol);
                }
                let board = Board::from_cells(cells);
                assert_eq!(winning_line(&board), Some((symbol, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "oox ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_decides() {
        // Top row and left column both complete; the row comes first.
        let board: Board = "ooo o.. o..".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((Symbol::Circle, WIN_LINES[0]))
        );

        // Circle owns the middle column, cross the right column.
        let board: Board = ".ox .ox .ox".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Symbol::Circle));
    }
}
