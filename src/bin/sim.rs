use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{init_logging, Board, Game, GamePhase, Session, Side};
use tokio::time::Duration;

/// Play one match against the computer with a random-firing stand-in for
/// the human player.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Computer thinking time in milliseconds (default: 300)")]
    delay_ms: Option<u64>,
    #[arg(long, help = "Print both boards after every turn")]
    verbose: bool,
}

async fn place_fleet(session: &mut Session, rng: &mut SmallRng) -> anyhow::Result<()> {
    let names: Vec<String> = session
        .snapshot()
        .await
        .available_ships
        .into_iter()
        .map(|s| s.name)
        .collect();
    for name in names {
        session.select_ship(&name).await?;
        loop {
            if rng.random_bool(0.5) {
                session.rotate_ship().await?;
            }
            let x = rng.random_range(0..seabattle::BOARD_SIZE as usize);
            let y = rng.random_range(0..seabattle::BOARD_SIZE as usize);
            session.set_candidate(x, y).await?;
            if session.place_ship().await.is_ok() {
                break;
            }
        }
    }
    Ok(())
}

fn print_boards(player: &Board, computer: &Board) {
    println!("You:\n{}", player);
    println!("Computer:\n{}", computer);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (game, mut rng) = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            (Game::from_seed(s), SmallRng::seed_from_u64(s.wrapping_add(1)))
        }
        None => {
            let mut seed_rng = rand::rng();
            (Game::new(), SmallRng::from_rng(&mut seed_rng))
        }
    };
    let mut session = match cli.delay_ms {
        Some(ms) => Session::new(game, Duration::from_millis(ms)),
        None => Session::with_default_delay(game),
    };

    place_fleet(&mut session, &mut rng).await?;
    session.start_match().await?;

    loop {
        let snap = session.snapshot().await;
        if snap.phase == GamePhase::GameOver {
            break;
        }
        let untried: Vec<usize> = snap
            .computer_board
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_untried())
            .map(|(i, _)| i)
            .collect();
        let target = untried[rng.random_range(0..untried.len())];
        let result = session.fire_at(target).await?;
        let reply = session.wait_computer().await?;
        if cli.verbose {
            println!("you fired at {}: {:?}, computer: {:?}", target, result, reply);
            let snap = session.snapshot().await;
            print_boards(
                &Board::from_cells(&snap.player_board)?,
                &Board::from_cells(&snap.computer_board)?,
            );
        }
    }

    let snap = session.snapshot().await;
    print_boards(
        &Board::from_cells(&snap.player_board)?,
        &Board::from_cells(&snap.computer_board)?,
    );
    let winner = match snap.winner {
        Some(Side::Player) => "player",
        Some(Side::Computer) => "computer",
        None => "none",
    };
    println!(
        "winner={} player_shots={} player_accuracy={}% computer_shots={} computer_accuracy={}%",
        winner,
        snap.player_stats.shots,
        snap.player_stats.accuracy_percent,
        snap.computer_stats.shots,
        snap.computer_stats.accuracy_percent,
    );
    Ok(())
}
