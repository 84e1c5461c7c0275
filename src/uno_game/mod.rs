pub mod card;
pub mod controller;
pub mod deck;
pub mod game;
pub mod player;
pub mod strategy;
pub mod ui;

pub use card::{Card, Color, PlayedCard, Rank};
pub use controller::GameController;
pub use deck::Deck;
pub use game::{Direction, Game, GameError, GameEvent, GameStatus};
pub use player::{Player, TurnAction};
pub use strategy::{AutomatedStrategy, HumanStrategy, Strategy};
pub use ui::ConsoleUi;
