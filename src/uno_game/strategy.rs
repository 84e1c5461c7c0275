use super::card::{Card, Color, PlayedCard};
use rand::rngs::StdRng;
use rand::Rng;
use std::io::{self, BufRead, BufReader, Write};

/// Decision-making for one player. `select_card` answers with an index into
/// the hand, or `None` for "decline to play, draw instead"; `select_color`
/// picks the active color after a wild is played.
pub trait Strategy {
    fn is_automated(&self) -> bool;

    /// `playable` holds the hand indices of every playable card, in hand
    /// order.
    fn select_card(
        &mut self,
        hand: &[Card],
        playable: &[usize],
        top: &PlayedCard,
    ) -> Option<usize>;

    fn select_color(&mut self, rng: &mut StdRng) -> Color;
}

/// Plays the first playable card in hand order and picks wild colors
/// uniformly at random. Deterministic given the hand and the rng.
pub struct AutomatedStrategy;

impl Strategy for AutomatedStrategy {
    fn is_automated(&self) -> bool {
        true
    }

    fn select_card(
        &mut self,
        _hand: &[Card],
        playable: &[usize],
        _top: &PlayedCard,
    ) -> Option<usize> {
        playable.first().copied()
    }

    fn select_color(&mut self, rng: &mut StdRng) -> Color {
        Color::ALL[rng.random_range(0..Color::ALL.len())]
    }
}

/// Prompts a person over the injected streams. Invalid or empty card input
/// degrades to "draw instead"; invalid color input re-prompts, and end of
/// input falls back to Red so the loop can never hang.
pub struct HumanStrategy {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl HumanStrategy {
    pub fn stdio() -> Self {
        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
        }
    }

    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Reads one line, trimmed. `None` on end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Strategy for HumanStrategy {
    fn is_automated(&self) -> bool {
        false
    }

    fn select_card(
        &mut self,
        hand: &[Card],
        playable: &[usize],
        top: &PlayedCard,
    ) -> Option<usize> {
        writeln!(self.output, "Top card in play: {}", top).unwrap();
        writeln!(self.output, "Playable cards:").unwrap();
        for (i, &hand_index) in playable.iter().enumerate() {
            writeln!(self.output, "  {}: {}", i + 1, hand[hand_index]).unwrap();
        }
        write!(
            self.output,
            "Enter the number of the card to play, or press Enter to draw: "
        )
        .unwrap();
        self.output.flush().unwrap();

        let choice = self.read_line()?;
        match choice.parse::<usize>() {
            Ok(n) if (1..=playable.len()).contains(&n) => Some(playable[n - 1]),
            _ => None,
        }
    }

    fn select_color(&mut self, _rng: &mut StdRng) -> Color {
        loop {
            write!(self.output, "Choose a color (Red, Green, Blue, Yellow): ").unwrap();
            self.output.flush().unwrap();

            let line = match self.read_line() {
                Some(line) => line,
                None => {
                    writeln!(self.output, "No input; defaulting to Red.").unwrap();
                    return Color::Red;
                }
            };
            match Color::parse(&line) {
                Some(color) => return color,
                None => {
                    writeln!(self.output, "'{}' is not a color, try again.", line).unwrap();
                }
            }
        }
    }
}
