use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    format_coord, init_logging, metro, parse_coord, print_player_view, render_path,
    standard_fleet, Board, BoardError, GameStatus, PlacementConfig, SeaBattle, ShotResult, Side,
    DEFAULT_GRID_SIZE, MAX_GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the console.
    Battle {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        grid_size: usize,
    },
    /// Print one random fleet layout.
    Layout {
        #[arg(long, help = "Fix RNG seed for reproducible layouts")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        grid_size: usize,
    },
    /// Find the fastest route on the sample metro map.
    Metro {
        #[arg(long, default_value = "Sretensky Bulvar")]
        from: String,
        #[arg(long, default_value = "Kitay-Gorod 1")]
        to: String,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn check_grid_size(grid_size: usize) -> anyhow::Result<PlacementConfig> {
    if grid_size == 0 || grid_size > MAX_GRID_SIZE {
        bail!("grid size must be between 1 and {}", MAX_GRID_SIZE);
    }
    Ok(PlacementConfig::new(grid_size))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Battle { seed, grid_size } => {
            let config = check_grid_size(grid_size)?;
            let mut rng = make_rng(seed);
            let game = SeaBattle::new(&config, &mut rng)?;
            run_battle(game, &mut rng)?;
        }
        Commands::Layout { seed, grid_size } => {
            let config = check_grid_size(grid_size)?;
            let mut rng = make_rng(seed);
            let specs = standard_fleet(&mut rng);
            let board = Board::random(&specs, &config, &mut rng)?;
            println!("{}", board);
            for ship in board.ships() {
                println!("{}", ship);
            }
        }
        Commands::Metro { from, to } => {
            let map = metro::sample_metro()?;
            match metro::route(&map, &from, &to)? {
                Some(path) => println!("{}", render_path(&map, &path)),
                None => {
                    let known = metro::SAMPLE_STATIONS.join(", ");
                    return Err(anyhow!("unknown station; known stations: {}", known));
                }
            }
        }
    }
    Ok(())
}

fn run_battle(mut game: SeaBattle, rng: &mut SmallRng) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.status() == GameStatus::InProgress {
        print_player_view(&game);

        // human turn
        loop {
            print!("Enter a cell to fire at (e.g. a1): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!("\nInput closed, leaving the game.");
                return Ok(());
            };
            let line = line?;
            let pos = match parse_coord(&line, game.grid_size()) {
                Ok(pos) => pos,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            match game.fire(Side::Human, pos) {
                Ok(result) => {
                    report("You", &format_coord(pos), result);
                    break;
                }
                Err(e @ BoardError::AlreadyShot { .. }) => println!("{}", e),
                Err(e) => return Err(e.into()),
            }
        }
        if game.status() != GameStatus::InProgress {
            break;
        }

        // computer turn
        let (pos, result) = game.fire_random(Side::Computer, rng)?;
        report("Computer", &format_coord(pos), result);
        if game.status() != GameStatus::InProgress {
            break;
        }

        game.end_round(rng)?;
    }

    print_player_view(&game);
    match game.status() {
        GameStatus::Won(Side::Human) => println!("Congratulations, you won!"),
        GameStatus::Won(Side::Computer) => println!("The computer won this time."),
        GameStatus::Draw | GameStatus::InProgress => println!("Draw."),
    }
    Ok(())
}

fn report(who: &str, cell: &str, result: ShotResult) {
    match result {
        ShotResult::Miss => println!("{} fired at {}: miss", who, cell),
        ShotResult::Hit { .. } => println!("{} fired at {}: hit!", who, cell),
        ShotResult::Sink { .. } => println!("{} fired at {}: ship sunk!", who, cell),
    }
}
