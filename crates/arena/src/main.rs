//! Reversi CLI
//!
//! Play an interactive game or run series between strategies.

use std::env;
use std::path::Path;

use arena::{ConsoleNotifier, Game, Players, SeriesConfig, SeriesRunner, SilentNotifier};
use console_player::ConsolePlayer;
use random_player::RandomPlayer;
use reversi_core::Player;

fn print_usage() {
    println!("Reversi match runner");
    println!();
    println!("Usage:");
    println!("  reversi play [DARK] [LIGHT] [--swap]");
    println!("  reversi series <PLAYER1> <PLAYER2> [--games N] [--no-rotate]");
    println!("                 [--quiet] [--save PATH] [--config PATH]");
    println!();
    println!("Players:");
    println!("  random        - Uniform random choice among legal moves");
    println!("  human         - Interactive prompt on the terminal");
    println!();
    println!("Examples:");
    println!("  reversi play human random");
    println!("  reversi series random random --games 20 --save series.json");
}

fn create_player(spec: &str, name: &str) -> Box<dyn Player> {
    match spec.to_lowercase().as_str() {
        "random" => Box::new(RandomPlayer::new(name)),
        "human" | "console" | "interactive" => Box::new(ConsolePlayer::new(name)),
        _ => {
            eprintln!("Unknown player: {}, using random", spec);
            Box::new(RandomPlayer::new(name))
        }
    }
}

/// Seat names stay unique even when both specs are identical.
fn seat_names(spec1: &str, spec2: &str) -> (String, String) {
    if spec1 == spec2 {
        (format!("{}-1", spec1), format!("{}-2", spec2))
    } else {
        (spec1.to_string(), spec2.to_string())
    }
}

fn run_play(args: &[String]) {
    let mut swap = false;
    let mut specs: Vec<&str> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--swap" => swap = true,
            other => specs.push(other),
        }
    }

    let dark_spec = specs.first().copied().unwrap_or("human");
    let light_spec = specs.get(1).copied().unwrap_or("random");
    let (dark_name, light_name) = seat_names(dark_spec, light_spec);

    let players = Players::new(
        create_player(dark_spec, &dark_name),
        create_player(light_spec, &light_name),
    );
    let mut game = Game::new(players, Box::new(ConsoleNotifier));

    game.new_game(swap);
    game.run_game_loop();
}

fn run_series(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: series requires two player specifications");
        print_usage();
        return;
    }

    let spec1 = &args[0];
    let spec2 = &args[1];

    let mut config = SeriesConfig::default();
    let mut save_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    match SeriesConfig::load(Path::new(&args[i + 1])) {
                        Ok(loaded) => config = loaded,
                        Err(e) => eprintln!("Warning: {}", e),
                    }
                    i += 1;
                }
            }
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(config.num_games);
                    i += 1;
                }
            }
            "--no-rotate" => config.alternate_colors = false,
            "--quiet" | "-q" => config.verbose = false,
            "--save" | "-s" => {
                if i + 1 < args.len() {
                    save_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Series: {} vs {} ===", spec1, spec2);
    println!("Games: {}", config.num_games);
    println!();

    let (name1, name2) = seat_names(spec1, spec2);
    let players = Players::new(
        create_player(spec1, &name1),
        create_player(spec2, &name2),
    );
    let mut game = Game::new(players, Box::new(SilentNotifier));

    let runner = SeriesRunner::new(config);
    let result = runner.run(&mut game);

    println!();
    result.print_report();

    if let Some(path) = save_path {
        if let Err(e) = result.save(Path::new(&path)) {
            eprintln!("Warning: Failed to save series result: {}", e);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "series" => run_series(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
