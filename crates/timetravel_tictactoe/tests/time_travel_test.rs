//! Tests for history, navigation and win detection.

use timetravel_tictactoe::invariants::{GameInvariants, InvariantSet};
use timetravel_tictactoe::{
    Action, Board, GameState, Line, Marker, Phase, Square, Store, rules, winning_line,
};

fn play(cells: &[usize]) -> GameState {
    cells.iter().fold(GameState::new(), |state, &cell| state.click(cell))
}

fn board_from_code(mut code: usize) -> Board {
    let squares = (0..9)
        .map(|_| {
            let square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Marker::X),
                _ => Square::Occupied(Marker::O),
            };
            code /= 3;
            square
        })
        .collect();
    Board::from_squares(squares).expect("nine squares")
}

#[test]
fn test_detector_agrees_with_catalog_on_every_board() {
    let lines = rules::catalog(3);
    for code in 0..3usize.pow(9) {
        let board = board_from_code(code);
        let complete: Vec<&Line> = lines
            .iter()
            .filter(|line| {
                let first = board.get(line.cells()[0]);
                first != Some(Square::Empty)
                    && line.cells().iter().all(|&i| board.get(i) == first)
            })
            .collect();

        match winning_line(&board) {
            Some(line) => assert_eq!(Some(&line), complete.first().copied(), "board {code}"),
            None => assert!(complete.is_empty(), "board {code}"),
        }
    }
}

#[test]
fn test_first_click_example() {
    let state = GameState::new().click(0);
    assert_eq!(state.board().get(0), Some(Square::Occupied(Marker::X)));
    assert_eq!(state.next_player(), Marker::O);
    assert!(state.current().winning_line().is_none());
    assert_eq!(state.click(0), state);
}

#[test]
fn test_column_win_example() {
    let state = play(&[0, 1, 3, 4, 6]);
    assert_eq!(state.current().winning_line(), &Some(Line::from([0, 3, 6])));
    assert_eq!(state.status().to_string(), "Winner: X");
}

#[test]
fn test_decided_game_ignores_every_click() {
    let state = play(&[0, 1, 3, 4, 6]);
    for cell in 0..9 {
        assert_eq!(state.click(cell), state);
    }
}

#[test]
fn test_history_tracks_current_move_after_each_click() {
    let mut state = GameState::new();
    for cell in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        state = state.click(cell);
        assert_eq!(state.history().len(), state.current_move() + 1);
    }
}

#[test]
fn test_history_tracks_current_move_after_branching() {
    let state = play(&[4, 0, 8]).move_to(1).click(2);
    assert_eq!(state.history().len(), state.current_move() + 1);
    assert_eq!(state.history().len(), 3);
}

#[test]
fn test_navigation_is_last_write_wins() {
    let state = play(&[4, 0, 8, 2]);
    for i in 0..state.history().len() {
        for j in 0..state.history().len() {
            assert_eq!(state.move_to(i).move_to(j), state.move_to(j));
        }
    }
}

#[test]
fn test_navigation_does_not_touch_history() {
    let state = play(&[4, 0, 8, 2]);
    let back = state.move_to(1);
    assert_eq!(back.history(), state.history());
    assert_eq!(back.current_move(), 1);
}

#[test]
fn test_double_toggle_restores_move_list() {
    let state = play(&[4, 0, 8]);
    let toggled = state.toggle_sort_order().toggle_sort_order();
    assert_eq!(toggled.move_list(), state.move_list());
    assert_eq!(toggled.history(), state.history());
}

#[test]
fn test_full_board_without_winner_stays_in_progress() {
    // X O X / X O O / O X X
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.history().len(), 10);
    assert_eq!(state.phase(), Phase::InProgress);
    assert_eq!(state.status().to_string(), "Next player: O");
}

#[test]
fn test_larger_board_positions() {
    let state = GameState::with_side(4).expect("valid side").click(7);
    let labels: Vec<String> = state.move_list().iter().map(|m| m.to_string()).collect();
    assert_eq!(labels[1], "Go to Move #1 (2, 4)");
}

#[test]
fn test_store_keeps_invariants_through_a_session() {
    let mut store = Store::new(GameState::new());
    let actions = [
        Action::Click(4),
        Action::Click(0),
        Action::ToggleSortOrder,
        Action::Click(8),
        Action::MoveTo(1),
        Action::Click(2),
        Action::Click(6),
        Action::Click(3),
        Action::Click(7),
        Action::MoveTo(0),
    ];
    for action in actions {
        store.dispatch(action);
        assert!(GameInvariants::check_all(store.state()).is_ok(), "after {action}");
    }
    assert_eq!(store.state().current_move(), 0);
    assert_eq!(store.state().next_player(), Marker::X);
}
