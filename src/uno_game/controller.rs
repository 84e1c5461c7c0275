use super::game::{Game, GameStatus};
use super::ui::ConsoleUi;
use log::info;

/// Owns the game and the output sink and drives the turn loop to completion.
pub struct GameController {
    game: Game,
    ui: ConsoleUi,
}

impl GameController {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            ui: ConsoleUi::new(),
        }
    }

    pub fn with_ui(game: Game, ui: ConsoleUi) -> Self {
        Self { game, ui }
    }

    /// Runs turns until somebody wins; returns the winner's name.
    pub fn run(&mut self) -> String {
        self.ui.welcome();

        while self.game.status == GameStatus::InProgress {
            self.ui.display_turn_header(&self.game);
            for event in self.game.play_turn() {
                self.ui.narrate(&event);
            }
        }

        let winner = self
            .game
            .winner()
            .map(|player| player.name.clone())
            .unwrap_or_default();
        info!("game over, {} won", winner);
        winner
    }
}
