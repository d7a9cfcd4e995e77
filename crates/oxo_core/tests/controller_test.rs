//! Scenario tests for the game controller.

use oxo_core::rules::{check_winner, is_draw};
use oxo_core::{
    Board, Cell, GameController, MoveTicket, Outcome, Phase, Position, Reaction, Rejection,
    SequenceChooser, Status, Symbol,
};

fn controller(script: &[usize]) -> GameController {
    let script = script.iter().filter_map(|i| Position::from_index(*i));
    GameController::new(SequenceChooser::new(script))
}

/// Plays the human's cells in order, answering each with the scripted computer.
fn play(game: &mut GameController, cells: &[usize]) -> Reaction {
    let mut last = Reaction::AwaitingPlayer;
    for &cell in cells {
        let reaction = game.select_index(cell);
        last = game.resolve_computer_turns(reaction);
    }
    last
}

#[test]
fn test_fresh_controller_is_selecting() {
    let game = controller(&[]);
    let state = game.state();
    assert_eq!(state.phase(), Phase::Selecting);
    assert!(state.board().is_blank());
    assert_eq!(state.player_symbol(), None);
    assert_eq!(state.computer_symbol(), None);
    assert_eq!(state.current_turn(), None);
    assert_eq!(game.status().to_string(), "Choose your symbol");
}

#[test]
fn test_select_circle_then_click_first_cell() {
    let mut game = controller(&[4]);

    let reaction = game.choose_symbol(Symbol::Circle);
    assert_eq!(reaction, Reaction::AwaitingPlayer);
    assert_eq!(game.state().phase(), Phase::Playing);
    assert!(game.state().board().is_blank());
    assert_eq!(game.state().current_turn(), Some(Symbol::Circle));
    assert_eq!(game.status().to_string(), "Current turn: ○");
    assert_eq!(
        game.state().players_line().as_deref(),
        Some("You: ○ | Computer: ✕")
    );

    let reaction = game.select_index(0);
    let ticket = reaction.ticket().expect("computer should be due");
    assert_eq!(
        game.state().board().get(Position::TopLeft),
        Cell::Marked(Symbol::Circle)
    );
    assert_eq!(game.state().current_turn(), Some(Symbol::Cross));

    let before = *game.state().board();
    let reaction = game.play_computer_move(ticket);
    assert_eq!(reaction, Reaction::AwaitingPlayer);
    assert_eq!(game.state().current_turn(), Some(Symbol::Circle));
    assert_eq!(game.state().board().count(Symbol::Cross), 1);
    assert!(before.is_empty(Position::Center));
    assert_eq!(
        game.state().board().get(Position::Center),
        Cell::Marked(Symbol::Cross)
    );
}

#[test]
fn test_select_cross_lets_computer_open() {
    let mut game = controller(&[8]);
    let reaction = game.choose_symbol(Symbol::Cross);

    assert_eq!(game.state().player_symbol(), Some(Symbol::Cross));
    assert_eq!(game.state().computer_symbol(), Some(Symbol::Circle));
    assert_eq!(game.state().current_turn(), Some(Symbol::Circle));
    assert!(matches!(reaction, Reaction::ComputerToMove(_)));

    // The human cannot jump the queue.
    assert_eq!(
        game.select_cell(Position::Center),
        Reaction::Ignored(Rejection::NotPlayersTurn)
    );

    let reaction = game.resolve_computer_turns(reaction);
    assert_eq!(reaction, Reaction::AwaitingPlayer);
    assert_eq!(
        game.state().board().get(Position::BottomRight),
        Cell::Marked(Symbol::Circle)
    );
    assert_eq!(game.state().current_turn(), Some(Symbol::Cross));
}

#[test]
fn test_player_wins_top_row() {
    let mut game = controller(&[3, 4]);
    game.choose_symbol(Symbol::Circle);

    let reaction = play(&mut game, &[0, 1, 2]);

    assert_eq!(reaction, Reaction::Finished(Outcome::Winner(Symbol::Circle)));
    assert_eq!(game.state().phase(), Phase::Win);
    assert_eq!(game.state().winner(), Some(Symbol::Circle));
    assert_eq!(game.status(), Status::PlayerWins);
    assert_eq!(game.status().to_string(), "You win!");
    assert_eq!(*game.tally().wins(), 1);
}

#[test]
fn test_computer_wins_top_row() {
    let mut game = controller(&[0, 1, 2]);
    let opening = game.choose_symbol(Symbol::Cross);
    game.resolve_computer_turns(opening);

    let reaction = play(&mut game, &[3, 4]);

    assert_eq!(reaction, Reaction::Finished(Outcome::Winner(Symbol::Circle)));
    assert_eq!(game.status().to_string(), "Computer wins!");
    assert_eq!(*game.tally().losses(), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // ○✕○ / ○✕✕ / ✕○○
    let mut game = controller(&[4, 1, 6, 5]);
    game.choose_symbol(Symbol::Circle);

    let reaction = play(&mut game, &[0, 2, 7, 3, 8]);

    assert_eq!(reaction, Reaction::Finished(Outcome::Draw));
    assert_eq!(game.state().phase(), Phase::Draw);
    assert_eq!(game.state().winner(), None);
    assert!(game.state().board().is_full());
    assert_eq!(game.status().to_string(), "It's a draw!");
    assert_eq!(*game.tally().draws(), 1);

    let reaction = game.restart();
    assert_eq!(reaction, Reaction::AwaitingPlayer);
    let state = game.state();
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.board().is_blank());
    assert_eq!(state.current_turn(), Some(Symbol::Circle));
    assert_eq!(state.winner(), None);
    assert_eq!(*game.tally().draws(), 1);
}

#[test]
fn test_reference_boards() {
    let draw: Board = "○✕○ ✕○✕ ✕○✕".parse().unwrap();
    assert!(is_draw(&draw));
    assert_eq!(check_winner(&draw), None);

    let win: Board = "○○○ ... ...".parse().unwrap();
    assert_eq!(check_winner(&win), Some(Symbol::Circle));
    assert!(!is_draw(&win));
}

#[test]
fn test_invalid_clicks_are_noops() {
    let mut game = controller(&[3, 4]);

    assert_eq!(
        game.select_cell(Position::Center),
        Reaction::Ignored(Rejection::NotPlaying)
    );

    game.choose_symbol(Symbol::Circle);
    play(&mut game, &[0]);
    let snapshot = game.state().clone();

    assert_eq!(
        game.select_cell(Position::TopLeft),
        Reaction::Ignored(Rejection::CellOccupied(Position::TopLeft))
    );
    assert_eq!(
        game.select_cell(Position::MiddleLeft),
        Reaction::Ignored(Rejection::CellOccupied(Position::MiddleLeft))
    );
    assert_eq!(
        game.select_index(9),
        Reaction::Ignored(Rejection::OutOfRange(9))
    );
    assert_eq!(
        game.choose_symbol(Symbol::Cross),
        Reaction::Ignored(Rejection::NotSelecting)
    );
    assert_eq!(game.state(), &snapshot);

    play(&mut game, &[1, 2]);
    assert_eq!(game.state().phase(), Phase::Win);
    let finished = game.state().clone();
    assert_eq!(
        game.select_cell(Position::BottomRight),
        Reaction::Ignored(Rejection::NotPlaying)
    );
    assert_eq!(game.state(), &finished);
}

#[test]
fn test_computer_move_out_of_turn_is_noop() {
    let mut game = controller(&[]);
    game.choose_symbol(Symbol::Circle);
    let round = game.state().round();

    assert_eq!(
        game.play_computer_move(MoveTicket { round }),
        Reaction::Ignored(Rejection::NotComputersTurn)
    );
}

#[test]
fn test_restart_after_win_keeps_symbols() {
    let mut game = controller(&[3, 4]);
    game.choose_symbol(Symbol::Circle);
    play(&mut game, &[0, 1, 2]);
    let round = game.state().round();

    let reaction = game.restart();

    assert_eq!(reaction, Reaction::AwaitingPlayer);
    let state = game.state();
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.board().is_blank());
    assert!(state.history().is_empty());
    assert_eq!(state.winner(), None);
    assert_eq!(state.current_turn(), Some(Symbol::Circle));
    assert_eq!(state.player_symbol(), Some(Symbol::Circle));
    assert_eq!(state.round(), round + 1);
    assert_eq!(game.tally().rounds(), 1);
}

#[test]
fn test_restart_when_computer_holds_circle_schedules_it() {
    let mut game = controller(&[0, 1, 2]);
    let opening = game.choose_symbol(Symbol::Cross);
    game.resolve_computer_turns(opening);
    play(&mut game, &[3, 4]);
    assert_eq!(game.state().phase(), Phase::Win);

    let reaction = game.restart();
    assert_eq!(
        reaction,
        Reaction::ComputerToMove(MoveTicket {
            round: game.state().round()
        })
    );
}

#[test]
fn test_restart_mid_round_discards_pending_computer_move() {
    let mut game = controller(&[]);
    game.choose_symbol(Symbol::Circle);
    let stale = game.select_cell(Position::Center).ticket().unwrap();

    assert_eq!(game.restart(), Reaction::AwaitingPlayer);
    assert_eq!(game.state().phase(), Phase::Playing);
    assert_eq!(game.state().current_turn(), Some(Symbol::Circle));
    let snapshot = game.state().clone();

    assert!(matches!(
        game.play_computer_move(stale),
        Reaction::Ignored(Rejection::StaleTicket { .. })
    ));
    assert_eq!(game.state(), &snapshot);
    assert!(game.state().board().is_blank());
}

#[test]
fn test_computer_reads_board_when_it_fires() {
    // Ticket issued while eight cells were open, redeemed against the
    // board as it stands at redemption time.
    let mut game = controller(&[0, 4]);
    game.choose_symbol(Symbol::Circle);
    let ticket = game.select_cell(Position::TopLeft).ticket().unwrap();

    // Scripted TopLeft is taken by now, so the chooser moves on to Center.
    game.play_computer_move(ticket);
    assert_eq!(
        game.state().board().get(Position::Center),
        Cell::Marked(Symbol::Cross)
    );
    assert_eq!(
        game.state().board().get(Position::TopLeft),
        Cell::Marked(Symbol::Circle)
    );
}
