use crate::config;

pub const BOARD_CELLS: usize = 4;

/// Piece values laid out cell by cell. Always a permutation of `0..4`,
/// piece `n` belongs in cell `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board([u8; BOARD_CELLS]);

impl Board {
    pub const SOLVED: Board = Board([0, 1, 2, 3]);

    pub fn scrambled() -> Self {
        Board(config::SCRAMBLED_BOARD)
    }

    pub fn pieces(&self) -> &[u8; BOARD_CELLS] {
        &self.0
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selecting(usize),
    Solved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(usize),
    Deselected,
    Swapped,
    Solved,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleState {
    board: Board,
    selected: Option<usize>,
    solved: bool,
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleState {
    pub fn new() -> Self {
        Self {
            board: Board::scrambled(),
            selected: None,
            solved: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn phase(&self) -> Phase {
        match (self.solved, self.selected) {
            (true, _) => Phase::Solved,
            (false, Some(index)) => Phase::Selecting(index),
            (false, None) => Phase::Idle,
        }
    }

    /// Two-click swap gesture. The first click marks a cell, the second swaps
    /// it with the marked one (or just clears the mark when it is the same
    /// cell). Once solved the board stops reacting.
    pub fn select_piece(&mut self, index: usize) -> SelectOutcome {
        if self.solved || index >= BOARD_CELLS {
            return SelectOutcome::Ignored;
        }

        match self.selected.take() {
            None => {
                self.selected = Some(index);
                SelectOutcome::Selected(index)
            }
            Some(first) if first == index => SelectOutcome::Deselected,
            Some(first) => {
                self.board.swap(first, index);
                if self.board.is_solved() {
                    self.solved = true;
                    SelectOutcome::Solved
                } else {
                    SelectOutcome::Swapped
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(board: &Board) -> bool {
        let mut seen = [false; BOARD_CELLS];
        for &piece in board.pieces() {
            let slot = piece as usize;
            if slot >= BOARD_CELLS || seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }

    #[test]
    fn starts_scrambled_and_idle() {
        let state = PuzzleState::new();
        assert_eq!(state.board().pieces(), &[1, 3, 0, 2]);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_solved());
    }

    #[test]
    fn three_swaps_solve_the_board_once() {
        let mut state = PuzzleState::new();
        let clicks = [0, 2, 1, 2, 2, 3];
        let outcomes: Vec<_> = clicks.iter().map(|&i| state.select_piece(i)).collect();

        assert_eq!(
            outcomes,
            vec![
                SelectOutcome::Selected(0),
                SelectOutcome::Swapped,
                SelectOutcome::Selected(1),
                SelectOutcome::Swapped,
                SelectOutcome::Selected(2),
                SelectOutcome::Solved,
            ]
        );
        assert_eq!(state.board(), &Board::SOLVED);
        assert_eq!(state.phase(), Phase::Solved);

        let solved_count = outcomes
            .iter()
            .filter(|outcome| **outcome == SelectOutcome::Solved)
            .count();
        assert_eq!(solved_count, 1);

        // Further clicks cannot re-trigger or unsolve
        assert_eq!(state.select_piece(0), SelectOutcome::Ignored);
        assert_eq!(state.select_piece(1), SelectOutcome::Ignored);
        assert_eq!(state.board(), &Board::SOLVED);
    }

    #[test]
    fn opposite_pair_swaps_leave_a_cycle_unsolved() {
        // [1,3,0,2] is a single 4-cycle, two disjoint swaps cannot sort it
        let mut state = PuzzleState::new();
        for index in [0, 2, 1, 3] {
            state.select_piece(index);
        }
        assert_eq!(state.board().pieces(), &[0, 2, 1, 3]);
        assert!(!state.is_solved());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn same_cell_twice_deselects_without_swapping() {
        let mut state = PuzzleState::new();
        let before = *state.board();

        assert_eq!(state.select_piece(2), SelectOutcome::Selected(2));
        assert_eq!(state.phase(), Phase::Selecting(2));
        assert_eq!(state.select_piece(2), SelectOutcome::Deselected);

        assert_eq!(state.board(), &before);
        assert_eq!(state.selected(), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut state = PuzzleState::new();
        assert_eq!(state.select_piece(BOARD_CELLS), SelectOutcome::Ignored);
        assert_eq!(state.selected(), None);

        state.select_piece(1);
        assert_eq!(state.select_piece(9), SelectOutcome::Ignored);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn board_stays_a_permutation_over_long_click_runs() {
        let mut state = PuzzleState::new();
        // Deterministic pseudo-random clicks
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            state.select_piece((seed % BOARD_CELLS as u32) as usize);
            assert!(is_permutation(state.board()), "broken board {:?}", state.board());
            if state.is_solved() {
                state = PuzzleState::new();
            }
        }
    }

    #[test]
    fn selection_clears_after_every_swap() {
        let mut state = PuzzleState::new();
        state.select_piece(0);
        state.select_piece(1);
        assert_eq!(state.selected(), None);
        assert_eq!(state.board().pieces(), &[3, 1, 0, 2]);
    }
}
