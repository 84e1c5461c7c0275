use super::card::{Card, Color, PlayedCard, Rank};
use super::deck::Deck;
use super::player::{Player, TurnAction};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INITIAL_HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Complete { winner: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    NotEnoughPlayers,
    TooManyPlayers,
    EmptyDeck,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotEnoughPlayers => {
                write!(f, "at least {} players are required", MIN_PLAYERS)
            }
            GameError::TooManyPlayers => {
                write!(f, "at most {} players are supported", MAX_PLAYERS)
            }
            GameError::EmptyDeck => write!(f, "deck ran out of cards during setup"),
        }
    }
}

/// Everything the output sink needs to narrate a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CardPlayed {
        player: String,
        card: Card,
    },
    /// The player had nothing playable and drew instead; `card` is `None`
    /// when the deck was exhausted.
    CardDrawn {
        player: String,
        card: Option<Card>,
    },
    /// The player declined to play despite holding a playable card.
    TurnPassed {
        player: String,
    },
    PlayerSkipped {
        player: String,
    },
    DirectionReversed {
        direction: Direction,
    },
    /// `received` can fall short of `count` on deck exhaustion. The target's
    /// turn is forfeited either way.
    PenaltyDraw {
        player: String,
        count: usize,
        received: usize,
    },
    ColorChosen {
        player: String,
        color: Color,
    },
    UnoCalled {
        player: String,
    },
    GameWon {
        player: String,
    },
}

/// The turn state machine: a fixed roster of players, the deck, the current
/// player index and the direction of play.
pub struct Game {
    pub players: Vec<Player>,
    pub deck: Deck,
    pub current: usize,
    pub direction: Direction,
    pub status: GameStatus,
    rng: StdRng,
}

impl Game {
    /// Shuffles a fresh deck, flips the seed card onto the discard pile and
    /// deals seven cards to each player.
    pub fn new(players: Vec<Player>, mut rng: StdRng) -> Result<Self, GameError> {
        if players.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        let mut deck = Deck::new(&mut rng);
        if !deck.flip_first(&mut rng) {
            return Err(GameError::EmptyDeck);
        }

        let mut game = Self {
            players,
            deck,
            current: 0,
            direction: Direction::Clockwise,
            status: GameStatus::InProgress,
            rng,
        };
        for index in 0..game.players.len() {
            let dealt = game.players[index].draw_from(&mut game.deck, &mut game.rng, INITIAL_HAND_SIZE);
            if dealt.len() < INITIAL_HAND_SIZE {
                return Err(GameError::EmptyDeck);
            }
        }
        info!("game starts with {} players", game.players.len());
        Ok(game)
    }

    /// The visible top of the discard pile. Seeded in `new`, so always
    /// present once the game exists.
    pub fn top_card(&self) -> &PlayedCard {
        self.deck
            .top()
            .expect("discard pile is seeded before the first turn")
    }

    /// The index the turn passes to next, given the current direction.
    pub fn next_index(&self) -> usize {
        let count = self.players.len();
        match self.direction {
            Direction::Clockwise => (self.current + 1) % count,
            Direction::CounterClockwise => (self.current + count - 1) % count,
        }
    }

    /// Moves the turn to the next player.
    pub fn advance(&mut self) {
        self.current = self.next_index();
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Complete { winner } => Some(&self.players[winner]),
            GameStatus::InProgress => None,
        }
    }

    /// Runs one full turn of the current player and returns the events to
    /// narrate. A no-op once the game is complete.
    pub fn play_turn(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if matches!(self.status, GameStatus::Complete { .. }) {
            return events;
        }

        let actor = self.current;
        let top = *self.top_card();
        let action = self.players[actor].take_turn(&top, &mut self.deck, &mut self.rng);
        let name = self.players[actor].name.clone();

        match action {
            TurnAction::Played(card) => {
                debug!("{} plays {}", name, card);
                events.push(GameEvent::CardPlayed {
                    player: name,
                    card,
                });
                self.resolve_play(actor, card, &mut events);
            }
            TurnAction::Drew(card) => {
                debug!("{} has no play and draws", name);
                events.push(GameEvent::CardDrawn { player: name, card });
                self.advance();
            }
            TurnAction::Passed => {
                debug!("{} passes", name);
                events.push(GameEvent::TurnPassed { player: name });
                self.advance();
            }
        }
        events
    }

    /// Applies the effect of a just-played card, records it on the discard
    /// pile and advances the turn.
    ///
    /// Skip-class effects (Skip, Draw Two, Wild Draw Four) move `current`
    /// onto the forfeited player, so the single unconditional advance at the
    /// end lands on the player after them; no path advances twice beyond
    /// that. A wild's color is chosen by the acting player, never by the
    /// penalized one, and lives on the discard entry.
    fn resolve_play(&mut self, actor: usize, card: Card, events: &mut Vec<GameEvent>) {
        match card.rank {
            Rank::Skip => {
                let target = self.next_index();
                events.push(GameEvent::PlayerSkipped {
                    player: self.players[target].name.clone(),
                });
                self.current = target;
            }
            Rank::Reverse => {
                self.direction = self.direction.reverse();
                events.push(GameEvent::DirectionReversed {
                    direction: self.direction,
                });
            }
            Rank::DrawTwo | Rank::WildDrawFour => {
                let count = if card.rank == Rank::DrawTwo { 2 } else { 4 };
                let target = self.next_index();
                let received = self.players[target]
                    .draw_from(&mut self.deck, &mut self.rng, count)
                    .len();
                events.push(GameEvent::PenaltyDraw {
                    player: self.players[target].name.clone(),
                    count,
                    received,
                });
                self.current = target;
            }
            Rank::Number(_) | Rank::Wild => {}
        }

        let chosen_color = if card.is_wild() {
            let color = self.players[actor].choose_color(&mut self.rng);
            events.push(GameEvent::ColorChosen {
                player: self.players[actor].name.clone(),
                color,
            });
            Some(color)
        } else {
            None
        };
        self.deck.discard(PlayedCard::new(card, chosen_color));

        if self.players[actor].hand.is_empty() {
            self.status = GameStatus::Complete { winner: actor };
            info!("{} wins", self.players[actor].name);
            events.push(GameEvent::GameWon {
                player: self.players[actor].name.clone(),
            });
            return;
        }
        if self.players[actor].hand.len() == 1 {
            events.push(GameEvent::UnoCalled {
                player: self.players[actor].name.clone(),
            });
        }

        self.advance();
    }
}
