use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    init_logging, standard_fleet, Board, GameStatus, PlacementConfig, SeaBattle, Side,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    init_logging();

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let config = PlacementConfig::default();

    let specs1 = standard_fleet(&mut rng1);
    let specs2 = standard_fleet(&mut rng2);
    let board1 = Board::random(&specs1, &config, &mut rng1)?;
    let board2 = Board::random(&specs2, &config, &mut rng2)?;
    let mut game = SeaBattle::with_boards(board1, board2)?;

    while game.status() == GameStatus::InProgress {
        game.fire_random(Side::Human, &mut rng1)?;
        if game.status() != GameStatus::InProgress {
            break;
        }
        game.fire_random(Side::Computer, &mut rng2)?;
        if game.status() != GameStatus::InProgress {
            break;
        }
        game.end_round(&mut rng1)?;
    }

    let winner = match game.status() {
        GameStatus::Won(Side::Human) => Some("player1"),
        GameStatus::Won(Side::Computer) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "player1": game.score(Side::Human),
        "player2": game.score(Side::Computer),
        "rounds": game.rounds(),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
