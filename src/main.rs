use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uno_sim::uno_game::{Game, GameController, Player};

/// Turn-based UNO at the terminal: one human seat plus a table of bots.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Your name at the table
    #[arg(long, default_value = "You")]
    name: String,

    /// Number of automated opponents
    #[arg(long, default_value_t = 3)]
    bots: usize,

    /// Replace the human seat with another bot for an unattended run
    #[arg(long)]
    auto: bool,

    /// Seed for shuffles and bot decisions; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut players = Vec::with_capacity(args.bots + 1);
    if args.auto {
        players.push(Player::automated(args.name));
    } else {
        players.push(Player::human(args.name));
    }
    for i in 1..=args.bots {
        players.push(Player::automated(format!("Bot{}", i)));
    }

    match Game::new(players, rng) {
        Ok(game) => {
            GameController::new(game).run();
        }
        Err(e) => eprintln!("Failed to start game: {}", e),
    }
}
