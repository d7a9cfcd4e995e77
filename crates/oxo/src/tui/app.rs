//! Application state: the controller, the scheduler and UI-only state.

use super::input::{self, Action};
use crate::scheduler::{AppEvent, ComputerScheduler};
use crossterm::event::KeyCode;
use oxo_core::{GameController, Phase, Position, Reaction, Symbol};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    scheduler: ComputerScheduler,
    cursor: Position,
    symbol_cursor: Symbol,
    should_quit: bool,
}

impl App {
    /// Creates a new application in the symbol selection phase.
    pub fn new(game: GameController, scheduler: ComputerScheduler) -> Self {
        Self {
            game,
            scheduler,
            cursor: Position::Center,
            symbol_cursor: Symbol::Circle,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Highlighted symbol on the selection screen.
    pub fn symbol_cursor(&self) -> Symbol {
        self.symbol_cursor
    }

    /// True while a computer move is waiting for its delay.
    pub fn computer_thinking(&self) -> bool {
        self.scheduler.pending().is_some()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(phase = %self.game.state().phase()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = input::map_key(key, self.game.state().phase());
        debug!(?action, "Key mapped");

        match action {
            Action::Quit => {
                info!("User quit");
                self.scheduler.cancel();
                self.should_quit = true;
            }
            Action::ChooseSymbol(symbol) => self.choose_symbol(symbol),
            Action::ToggleSymbol => self.symbol_cursor = self.symbol_cursor.opponent(),
            Action::Activate if self.game.state().phase() == Phase::Selecting => {
                self.choose_symbol(self.symbol_cursor)
            }
            Action::Activate => {
                self.click_cell(self.cursor.to_index());
            }
            Action::SelectIndex(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.click_cell(index);
            }
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::Restart => self.restart(),
            Action::Nothing => {}
        }
    }

    /// Handles an event posted by a background task.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComputerMoveDue(ticket) => {
                self.scheduler.complete(ticket);
                let reaction = self.game.play_computer_move(ticket);
                self.follow_up(reaction);
            }
        }
    }

    fn choose_symbol(&mut self, symbol: Symbol) {
        self.symbol_cursor = symbol;
        let reaction = self.game.choose_symbol(symbol);
        self.follow_up(reaction);
    }

    fn click_cell(&mut self, index: usize) {
        let reaction = self.game.select_index(index);
        self.follow_up(reaction);
    }

    fn restart(&mut self) {
        self.scheduler.cancel();
        let reaction = self.game.restart();
        self.follow_up(reaction);
    }

    fn follow_up(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::ComputerToMove(ticket) => self.scheduler.schedule(ticket),
            Reaction::Finished(outcome) => {
                info!(%outcome, status = %self.game.status(), "Round over");
            }
            Reaction::AwaitingPlayer | Reaction::Ignored(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_core::{Cell, SequenceChooser};
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    fn app(script: &[usize]) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let script = script.iter().filter_map(|i| Position::from_index(*i));
        let game = GameController::new(SequenceChooser::new(script));
        let scheduler = ComputerScheduler::new(Duration::from_millis(5), tx);
        (App::new(game, scheduler), rx)
    }

    async fn next_event(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> AppEvent {
        timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("computer move should arrive")
            .expect("channel open")
    }

    #[tokio::test]
    async fn test_human_move_then_delayed_computer_reply() {
        let (mut app, mut rx) = app(&[4]);

        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Char('1'));
        assert!(app.computer_thinking());
        assert_eq!(
            app.game().state().current_turn(),
            Some(Symbol::Cross)
        );

        let event = next_event(&mut rx).await;
        app.handle_event(event);

        assert!(!app.computer_thinking());
        assert_eq!(
            app.game().state().board().get(Position::Center),
            Cell::Marked(Symbol::Cross)
        );
        assert_eq!(
            app.game().state().current_turn(),
            Some(Symbol::Circle)
        );
    }

    #[tokio::test]
    async fn test_restart_drops_pending_computer_move() {
        let (mut app, mut rx) = app(&[]);

        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Char('5'));
        assert!(app.computer_thinking());

        app.handle_key(KeyCode::Char('r'));
        assert!(!app.computer_thinking());
        assert!(app.game().state().board().is_blank());
        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_selection_with_arrow_and_enter() {
        let (mut app, mut rx) = app(&[0]);

        app.handle_key(KeyCode::Right);
        assert_eq!(app.symbol_cursor(), Symbol::Cross);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.game().state().player_symbol(), Some(Symbol::Cross));
        assert!(app.computer_thinking());

        let event = next_event(&mut rx).await;
        app.handle_event(event);
        assert_eq!(
            app.game().state().board().get(Position::TopLeft),
            Cell::Marked(Symbol::Circle)
        );
    }

    #[tokio::test]
    async fn test_cursor_click_on_taken_cell_is_ignored() {
        let (mut app, mut rx) = app(&[4]);

        app.handle_key(KeyCode::Char('x'));
        let event = next_event(&mut rx).await;
        app.handle_event(event);

        // Cursor starts on the center, which the computer just took.
        let before = app.game().state().clone();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().state(), &before);

        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().state().board().get(Position::TopCenter),
            Cell::Marked(Symbol::Cross)
        );
    }

    #[test]
    fn test_quit() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let scheduler = ComputerScheduler::new(Duration::from_millis(5), tx);
        let mut app = App::new(GameController::seeded(1), scheduler);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
