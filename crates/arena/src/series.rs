//! Running a series of games between the same two players.

use serde::{Deserialize, Serialize};
use std::path::Path;

use reversi_core::{GameResult, PlayerColor};

use crate::game::Game;

/// Configuration for a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to swap seats between games
    pub alternate_colors: bool,
    /// Print a result line after every game
    pub verbose: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl SeriesConfig {
    /// Load a config from a TOML file; missing keys use the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

/// Outcome of one game inside a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Winner name, None for a tie
    pub winner: Option<String>,
    pub dark_discs: usize,
    pub light_discs: usize,
    /// True when the game ended on an illegal move
    pub by_mistake: bool,
}

/// Tallied outcome of a series, from the perspective of the player who
/// was seated dark in the first game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesResult {
    pub reference_player: String,
    pub opponent: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub games: Vec<GameRecord>,
}

impl SeriesResult {
    pub fn new(reference_player: &str, opponent: &str) -> Self {
        Self {
            reference_player: reference_player.to_string(),
            opponent: opponent.to_string(),
            wins: 0,
            losses: 0,
            ties: 0,
            games: Vec::new(),
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Points for the reference player: 1 per win, half per tie.
    pub fn points(&self) -> f64 {
        self.wins as f64 + 0.5 * self.ties as f64
    }

    fn record(&mut self, result: &GameResult) {
        match result.winner() {
            Some(winner) if winner.name == self.reference_player => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.ties += 1,
        }

        let score = result.score();
        self.games.push(GameRecord {
            winner: result.winner().map(|w| w.name.clone()),
            dark_discs: score.dark(),
            light_discs: score.light(),
            by_mistake: matches!(result, GameResult::WinByOpponentMistake { .. }),
        });
    }

    /// Save the series result to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a series result from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Series: {} vs {} ===\n",
            self.reference_player, self.opponent
        ));
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} ties ({:.1} points / {} games)\n\n",
            self.reference_player,
            self.wins,
            self.losses,
            self.ties,
            self.points(),
            self.total_games()
        ));

        report.push_str(&format!(
            "{:<6} {:<20} {:>6}\n",
            "Game", "Winner", "Score"
        ));
        report.push_str(&"-".repeat(34));
        report.push('\n');
        for (i, game) in self.games.iter().enumerate() {
            let winner = game.winner.as_deref().unwrap_or("(tie)");
            let note = if game.by_mistake { " (mistake)" } else { "" };
            report.push_str(&format!(
                "{:<6} {:<20} {:>3}:{}{}\n",
                i + 1,
                winner,
                game.dark_discs,
                game.light_discs,
                note
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Runs a series of games on one [`Game`].
pub struct SeriesRunner {
    config: SeriesConfig,
}

impl SeriesRunner {
    pub fn new(config: SeriesConfig) -> Self {
        Self { config }
    }

    /// Play the configured number of games, rotating seats between
    /// games when enabled, and tally the outcomes.
    pub fn run(&self, game: &mut Game) -> SeriesResult {
        let reference = game.players().dark_player().name().to_string();
        let opponent = game.players().light_player().name().to_string();
        let mut series = SeriesResult::new(&reference, &opponent);

        for game_num in 0..self.config.num_games {
            let swap = self.config.alternate_colors && game_num > 0;
            game.new_game(swap);
            let result = game.run_game_loop().clone();
            series.record(&result);

            if self.config.verbose {
                println!(
                    "Game {}/{}: {}",
                    game_num + 1,
                    self.config.num_games,
                    outcome_line(&result)
                );
            }
        }

        series
    }
}

fn outcome_line(result: &GameResult) -> String {
    match result {
        GameResult::WinByScore { winner, score, .. } => format!(
            "{} won {}",
            winner.name,
            score.display_for(winner.color)
        ),
        GameResult::WinByOpponentMistake { winner, .. } => {
            format!("{} won (opponent made an invalid move)", winner.name)
        }
        GameResult::Tie { score, .. } => {
            format!("tie {}", score.display_for(PlayerColor::Dark))
        }
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod series_tests;
