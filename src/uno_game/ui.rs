use super::game::{Game, GameEvent};
use std::io::{self, Write};

/// The output sink: turns game state and events into human-readable
/// narration on an injected stream.
pub struct ConsoleUi {
    output: Box<dyn Write>,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self {
            output: Box::new(io::stdout()),
        }
    }

    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self { output }
    }

    pub fn welcome(&mut self) {
        writeln!(self.output, "Welcome to UNO!").unwrap();
    }

    /// Announces whose turn it is and what they are playing against. Hands
    /// are only revealed for human seats.
    pub fn display_turn_header(&mut self, game: &Game) {
        let player = &game.players[game.current];
        writeln!(
            self.output,
            "\n===== {}'S TURN =====",
            player.name.to_uppercase()
        )
        .unwrap();
        writeln!(self.output, "Top card in play: {}", game.top_card()).unwrap();
        writeln!(
            self.output,
            "Direction: {}, draw pile: {} cards",
            game.direction,
            game.deck.draw_pile_len()
        )
        .unwrap();
        if !player.is_automated() {
            let hand = player
                .hand
                .iter()
                .map(|card| card.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.output, "Your current hand: {}", hand).unwrap();
        }
    }

    pub fn narrate(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CardPlayed { player, card } => {
                writeln!(self.output, "{} plays {}", player, card).unwrap();
            }
            GameEvent::CardDrawn { player, card } => match card {
                Some(_) => writeln!(
                    self.output,
                    "{} has no playable cards and draws one from the deck.",
                    player
                )
                .unwrap(),
                None => writeln!(
                    self.output,
                    "{} has no playable cards, but the deck is exhausted.",
                    player
                )
                .unwrap(),
            },
            GameEvent::TurnPassed { player } => {
                writeln!(self.output, "{} keeps their cards and passes.", player).unwrap();
            }
            GameEvent::PlayerSkipped { player } => {
                writeln!(self.output, "{}'s turn is skipped!", player).unwrap();
            }
            GameEvent::DirectionReversed { direction } => {
                writeln!(self.output, "Direction reversed! Play is now {}.", direction).unwrap();
            }
            GameEvent::PenaltyDraw {
                player,
                count,
                received,
            } => {
                if received == count {
                    writeln!(
                        self.output,
                        "{} draws {} cards and is skipped!",
                        player, count
                    )
                    .unwrap();
                } else {
                    writeln!(
                        self.output,
                        "{} draws {} of {} cards (deck exhausted) and is skipped!",
                        player, received, count
                    )
                    .unwrap();
                }
            }
            GameEvent::ColorChosen { player, color } => {
                writeln!(self.output, "{} chooses the color {}.", player, color).unwrap();
            }
            GameEvent::UnoCalled { player } => {
                writeln!(self.output, "{} says UNO!", player).unwrap();
            }
            GameEvent::GameWon { player } => {
                writeln!(self.output, "\n{} wins the game!", player).unwrap();
            }
        }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}
