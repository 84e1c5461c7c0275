use super::card::{Card, Color, PlayedCard, Rank};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The draw pile and the discard pile, with the draw pile treated as a stack
/// (last element is the top). The deck is the single source of truth for the
/// visible top card.
#[derive(Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<PlayedCard>,
}

impl Deck {
    /// Builds the full 108-card set and shuffles it with the injected rng.
    /// The discard pile starts empty; callers seed it with `flip_first`.
    pub fn new(rng: &mut StdRng) -> Self {
        let mut draw_pile = Deck::full_card_set();
        draw_pile.shuffle(rng);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// The canonical 108 cards: per color one 0, two each of 1-9, Skip,
    /// Reverse and Draw Two, plus four Wilds and four Wild Draw Fours.
    pub fn full_card_set() -> Vec<Card> {
        let mut cards = Vec::with_capacity(108);

        for color in Color::ALL {
            cards.push(Card::new(color, Rank::Number(0)));
            for number in 1..=9 {
                cards.push(Card::new(color, Rank::Number(number)));
                cards.push(Card::new(color, Rank::Number(number)));
            }
            for _ in 0..2 {
                cards.push(Card::new(color, Rank::Skip));
                cards.push(Card::new(color, Rank::Reverse));
                cards.push(Card::new(color, Rank::DrawTwo));
            }
        }

        for _ in 0..4 {
            cards.push(Card::wild(Rank::Wild));
            cards.push(Card::wild(Rank::WildDrawFour));
        }

        cards
    }

    /// Removes and returns the top of the draw pile, reshuffling the discards
    /// back in first when the pile is empty. Returns `None` only when both
    /// piles are exhausted (the discard pile never gives up its top card);
    /// callers treat that as "draw fewer cards", not as an error.
    pub fn draw(&mut self, rng: &mut StdRng) -> Option<Card> {
        if self.draw_pile.is_empty() {
            self.reshuffle(rng);
        }
        self.draw_pile.pop()
    }

    /// Moves every discard except the visible top back into the draw pile and
    /// shuffles. No-op while the discard pile holds one card or fewer.
    fn reshuffle(&mut self, rng: &mut StdRng) {
        if self.discard_pile.len() <= 1 {
            debug!("draw pile empty and nothing to reshuffle");
            return;
        }
        let top = self.discard_pile.pop().expect("discard pile is non-empty");
        self.draw_pile
            .extend(self.discard_pile.drain(..).map(|played| played.card));
        self.discard_pile.push(top);
        self.draw_pile.shuffle(rng);
        info!(
            "reshuffled {} discards back into the draw pile",
            self.draw_pile.len()
        );
    }

    /// Seeds the discard pile with the top card of the draw pile, done once
    /// before dealing. Returns false if the draw pile was empty.
    pub fn flip_first(&mut self, rng: &mut StdRng) -> bool {
        match self.draw(rng) {
            Some(card) => {
                self.discard_pile.push(PlayedCard::new(card, None));
                true
            }
            None => false,
        }
    }

    pub fn discard(&mut self, played: PlayedCard) {
        self.discard_pile.push(played);
    }

    /// The visible top of the discard pile.
    pub fn top(&self) -> Option<&PlayedCard> {
        self.discard_pile.last()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// The discard pile in play order, oldest first.
    pub fn discards(&self) -> &[PlayedCard] {
        &self.discard_pile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn full_card_set_has_108_cards() {
        let cards = Deck::full_card_set();
        assert_eq!(cards.len(), 108);
    }

    #[test]
    fn full_card_set_has_canonical_counts() {
        let cards = Deck::full_card_set();
        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in cards {
            *counts.entry(card).or_default() += 1;
        }

        for color in Color::ALL {
            assert_eq!(counts[&Card::new(color, Rank::Number(0))], 1);
            for number in 1..=9 {
                assert_eq!(counts[&Card::new(color, Rank::Number(number))], 2);
            }
            assert_eq!(counts[&Card::new(color, Rank::Skip)], 2);
            assert_eq!(counts[&Card::new(color, Rank::Reverse)], 2);
            assert_eq!(counts[&Card::new(color, Rank::DrawTwo)], 2);
        }
        assert_eq!(counts[&Card::wild(Rank::Wild)], 4);
        assert_eq!(counts[&Card::wild(Rank::WildDrawFour)], 4);
    }

    #[test]
    fn draw_pops_from_the_top() {
        let mut rng = rng();
        let mut deck = Deck::new(&mut rng);
        let expected = *deck.draw_pile.last().unwrap();
        assert_eq!(deck.draw(&mut rng), Some(expected));
        assert_eq!(deck.draw_pile_len(), 107);
    }

    #[test]
    fn reshuffle_keeps_the_top_discard_and_loses_nothing() {
        let mut rng = rng();
        let mut deck = Deck::new(&mut rng);

        // Empty the draw pile into the discard pile, then put a known card on
        // top.
        while let Some(card) = deck.draw_pile.pop() {
            deck.discard(PlayedCard::new(card, None));
        }
        let top = PlayedCard::new(Card::new(Color::Red, Rank::Skip), None);
        deck.discard(top);

        let discarded = deck.discard_pile_len();
        let drawn = deck.draw(&mut rng);
        assert!(drawn.is_some());
        assert_eq!(deck.top(), Some(&top));
        assert_eq!(deck.discard_pile_len(), 1);
        // N discards became N-1 draw-pile cards, one of which was just drawn.
        assert_eq!(deck.draw_pile_len(), discarded - 2);
        assert_eq!(
            deck.draw_pile_len() + deck.discard_pile_len() + 1,
            discarded
        );
    }

    #[test]
    fn draw_returns_none_when_everything_is_exhausted() {
        let mut rng = rng();
        let mut deck = Deck::new(&mut rng);
        deck.draw_pile.clear();
        assert_eq!(deck.draw(&mut rng), None);

        // A lone discard is never reclaimed either.
        deck.discard(PlayedCard::new(Card::new(Color::Blue, Rank::Number(3)), None));
        assert_eq!(deck.draw(&mut rng), None);
        assert_eq!(deck.discard_pile_len(), 1);
    }

    #[test]
    fn flip_first_seeds_the_discard_pile() {
        let mut rng = rng();
        let mut deck = Deck::new(&mut rng);
        assert!(deck.top().is_none());
        assert!(deck.flip_first(&mut rng));
        assert_eq!(deck.discard_pile_len(), 1);
        assert_eq!(deck.draw_pile_len(), 107);
        assert!(deck.top().unwrap().chosen_color.is_none());
    }

    #[test]
    fn same_seed_shuffles_identically() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let deck_a = Deck::new(&mut a);
        let deck_b = Deck::new(&mut b);
        assert_eq!(deck_a.draw_pile, deck_b.draw_pile);
    }
}
