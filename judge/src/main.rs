use std::path::PathBuf;

use cardbattle::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use clap::{Args as ClapArgs, Parser};
use itertools::Itertools;
use judge::{play_pairing, standings, BoardSize, PairingStats, PlayerConfig, Standing};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays every configured player against every other one and reports the results.
#[derive(Parser)]
struct Args {
    /// Player config JSON files, at least two
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// Games per pairing, with sides swapped after every game
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// Seed for decks and random players, picked at random if absent
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    board: BoardArgs,

    /// End a pairing at its first illegal move instead of counting it as a forfeit
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(ClapArgs)]
struct BoardArgs {
    /// Columns per row
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Rows of the board
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,
}

impl From<&BoardArgs> for BoardSize {
    fn from(args: &BoardArgs) -> Self {
        BoardSize {
            width: args.width,
            height: args.height,
        }
    }
}

fn print_standings(standings: &[Standing]) {
    println!(
        "\n{:<20} {:>6} {:>6} {:>8} {:>8} {:>8}",
        "player", "games", "wins", "as left", "as right", "win %"
    );
    for standing in standings {
        println!(
            "{:<20} {:>6} {:>6} {:>8} {:>8} {:>7.1}%",
            standing.nick,
            standing.games,
            standing.wins.total(),
            standing.wins.as_left,
            standing.wins.as_right,
            standing.win_rate() * 100.0
        );
        if standing.forfeits > 0 {
            println!("    {} games lost through illegal moves", standing.forfeits);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let board_size = BoardSize::from(&args.board);

    let mut pairings: Vec<PairingStats> = Vec::new();
    for (first, second) in configs.iter().tuple_combinations() {
        let stats = play_pairing(
            &mut rng,
            [first, second],
            args.num_games,
            board_size,
            args.stop_on_illegal_move,
        )?;
        println!("{stats}");
        pairings.push(stats);
    }

    if configs.len() > 2 {
        print_standings(&standings(&pairings));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(Targets::new().with_default(level))
        .init();
}
