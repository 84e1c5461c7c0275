use super::card::{Card, Color, PlayedCard};
use super::deck::Deck;
use super::strategy::{AutomatedStrategy, HumanStrategy, Strategy};
use rand::rngs::StdRng;

/// What a player's turn amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// A card was played; it has already been removed from the hand.
    Played(Card),
    /// Nothing was playable; one card was drawn (`None` if the deck was
    /// exhausted).
    Drew(Option<Card>),
    /// A playable card existed but the player declined. No draw.
    Passed,
}

pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            strategy,
        }
    }

    pub fn automated(name: impl Into<String>) -> Self {
        Player::new(name, Box::new(AutomatedStrategy))
    }

    pub fn human(name: impl Into<String>) -> Self {
        Player::new(name, Box::new(HumanStrategy::stdio()))
    }

    pub fn is_automated(&self) -> bool {
        self.strategy.is_automated()
    }

    /// Draws up to `count` cards, stopping early if the deck runs dry.
    /// Returns the cards actually received.
    pub fn draw_from(&mut self, deck: &mut Deck, rng: &mut StdRng, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match deck.draw(rng) {
                Some(card) => {
                    self.hand.push(card);
                    drawn.push(card);
                }
                None => break,
            }
        }
        drawn
    }

    pub fn has_playable(&self, top: &PlayedCard) -> bool {
        self.hand.iter().any(|card| card.is_playable_on(top))
    }

    /// Hand indices of every playable card, in hand order. The stable order
    /// is what makes the automated first-playable choice and the 1-based
    /// human listing deterministic.
    pub fn playable_indices(&self, top: &PlayedCard) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_playable_on(top))
            .map(|(i, _)| i)
            .collect()
    }

    /// Runs one turn against the given top card: draw one card when nothing
    /// is playable, otherwise let the strategy pick. A declined or invalid
    /// selection passes the turn without drawing.
    pub fn take_turn(&mut self, top: &PlayedCard, deck: &mut Deck, rng: &mut StdRng) -> TurnAction {
        let playable = self.playable_indices(top);
        if playable.is_empty() {
            let drawn = self.draw_from(deck, rng, 1);
            return TurnAction::Drew(drawn.first().copied());
        }

        match self.strategy.select_card(&self.hand, &playable, top) {
            Some(index) if playable.contains(&index) => {
                TurnAction::Played(self.hand.remove(index))
            }
            _ => TurnAction::Passed,
        }
    }

    /// Lets the strategy pick the active color after a wild was played.
    pub fn choose_color(&mut self, rng: &mut StdRng) -> Color {
        self.strategy.select_color(rng)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("automated", &self.is_automated())
            .finish()
    }
}
