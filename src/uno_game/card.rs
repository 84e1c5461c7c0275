use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Stable order used for prompts and uniform random choice.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Parses a color from user input: full name or initial, any case.
    pub fn parse(input: &str) -> Option<Color> {
        match input.trim().to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "green" | "g" => Some(Color::Green),
            "blue" | "b" => Some(Color::Blue),
            "yellow" | "y" => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Rank {
    pub fn is_wild(&self) -> bool {
        matches!(self, Rank::Wild | Rank::WildDrawFour)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
            Rank::Wild => write!(f, "Wild"),
            Rank::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// A single card. `color` is `None` exactly for the wild family; the color a
/// wild takes on when played is recorded on the discard entry, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Option<Color>,
    pub rank: Rank,
}

impl Card {
    /// A colored number or action card.
    pub fn new(color: Color, rank: Rank) -> Self {
        debug_assert!(!rank.is_wild());
        Self {
            color: Some(color),
            rank,
        }
    }

    /// A Wild or Wild Draw Four, colorless until played.
    pub fn wild(rank: Rank) -> Self {
        debug_assert!(rank.is_wild());
        Self { color: None, rank }
    }

    pub fn is_wild(&self) -> bool {
        self.color.is_none()
    }

    /// Legality check against the visible top of the discard pile: wilds play
    /// on anything, otherwise the color must match the active color or the
    /// rank must match. A top with no active color (the seed flip was a wild)
    /// accepts any card.
    pub fn is_playable_on(&self, top: &PlayedCard) -> bool {
        if self.is_wild() {
            return true;
        }
        match top.active_color() {
            Some(color) => self.color == Some(color) || self.rank == top.rank(),
            None => true,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{} {}", color, self.rank),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// A discard-pile entry: the card plus, for wilds, the color chosen by the
/// player who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: Card,
    pub chosen_color: Option<Color>,
}

impl PlayedCard {
    pub fn new(card: Card, chosen_color: Option<Color>) -> Self {
        Self { card, chosen_color }
    }

    /// The color governing playability: the card's own color, or the chosen
    /// color of a played wild. `None` only for an unseeded wild on top.
    pub fn active_color(&self) -> Option<Color> {
        self.card.color.or(self.chosen_color)
    }

    pub fn rank(&self) -> Rank {
        self.card.rank
    }
}

impl fmt::Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.card.color, self.chosen_color) {
            (None, Some(color)) => write!(f, "{} ({})", self.card.rank, color),
            _ => write!(f, "{}", self.card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(card: Card) -> PlayedCard {
        PlayedCard::new(card, None)
    }

    #[test]
    fn same_color_is_playable() {
        let red_five = Card::new(Color::Red, Rank::Number(5));
        let red_skip = Card::new(Color::Red, Rank::Skip);
        assert!(red_five.is_playable_on(&played(red_skip)));
        assert!(red_skip.is_playable_on(&played(red_five)));
    }

    #[test]
    fn same_rank_is_playable_across_colors() {
        let red_five = Card::new(Color::Red, Rank::Number(5));
        let blue_five = Card::new(Color::Blue, Rank::Number(5));
        assert!(red_five.is_playable_on(&played(blue_five)));
    }

    #[test]
    fn mismatched_color_and_rank_is_not_playable() {
        let red_five = Card::new(Color::Red, Rank::Number(5));
        let blue_seven = Card::new(Color::Blue, Rank::Number(7));
        assert!(!red_five.is_playable_on(&played(blue_seven)));
        assert!(!blue_seven.is_playable_on(&played(red_five)));
    }

    #[test]
    fn wild_is_always_playable() {
        let wild = Card::wild(Rank::Wild);
        let draw_four = Card::wild(Rank::WildDrawFour);
        for color in Color::ALL {
            let top = played(Card::new(color, Rank::Number(9)));
            assert!(wild.is_playable_on(&top));
            assert!(draw_four.is_playable_on(&top));
        }
    }

    #[test]
    fn played_wild_governs_by_chosen_color() {
        let top = PlayedCard::new(Card::wild(Rank::Wild), Some(Color::Green));
        assert_eq!(top.active_color(), Some(Color::Green));
        let green_two = Card::new(Color::Green, Rank::Number(2));
        let red_two = Card::new(Color::Red, Rank::Number(2));
        assert!(green_two.is_playable_on(&top));
        // Rank equality against a wild top never applies; only the chosen
        // color does.
        assert!(!red_two.is_playable_on(&top));
    }

    #[test]
    fn anything_plays_on_an_unseeded_wild() {
        let top = played(Card::wild(Rank::WildDrawFour));
        assert_eq!(top.active_color(), None);
        let yellow_zero = Card::new(Color::Yellow, Rank::Number(0));
        assert!(yellow_zero.is_playable_on(&top));
    }

    #[test]
    fn color_parsing_accepts_names_and_initials() {
        assert_eq!(Color::parse("Red"), Some(Color::Red));
        assert_eq!(Color::parse("  green "), Some(Color::Green));
        assert_eq!(Color::parse("B"), Some(Color::Blue));
        assert_eq!(Color::parse("yELLow"), Some(Color::Yellow));
        assert_eq!(Color::parse("purple"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn card_serde_round_trip() {
        let card = Card::new(Color::Blue, Rank::DrawTwo);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);

        let entry = PlayedCard::new(Card::wild(Rank::Wild), Some(Color::Red));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(serde_json::from_str::<PlayedCard>(&json).unwrap(), entry);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Card::new(Color::Red, Rank::Number(7)).to_string(), "Red 7");
        assert_eq!(
            Card::new(Color::Green, Rank::DrawTwo).to_string(),
            "Green Draw Two"
        );
        assert_eq!(Card::wild(Rank::WildDrawFour).to_string(), "Wild Draw Four");
        assert_eq!(
            PlayedCard::new(Card::wild(Rank::Wild), Some(Color::Blue)).to_string(),
            "Wild (Blue)"
        );
    }
}
