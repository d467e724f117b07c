pub mod board;
pub mod position;
pub mod result;
pub mod score;
pub mod types;

// Re-export core game logic (not strategy-specific)
pub use board::*;
pub use position::*;
pub use result::*;
pub use score::*;
pub use types::*;

// =============================================================================
// Player trait — implemented by all strategies (random, interactive, etc.)
// =============================================================================

/// Trait that all Reversi players must implement.
///
/// This allows mixing interactive players, random baselines and future
/// engine-backed strategies in the same game loop.
pub trait Player {
    /// Display name used in notifications and result summaries.
    fn name(&self) -> &str;

    /// The color assigned by the most recent [`Player::start_game`].
    fn color(&self) -> PlayerColor;

    /// Record the assigned color for the upcoming game. Called by the
    /// game loop before the first `pick_move` of every game.
    fn start_game(&mut self, color: PlayerColor);

    /// Choose a move on the current board.
    ///
    /// Implementations should return a move drawn from
    /// `board.find_valid_moves(self.color())`; the game loop validates
    /// the returned position and scores an illegal one as an immediate
    /// loss for this player. The loop never calls this when the player
    /// has no legal move.
    fn pick_move(&mut self, board: &Board) -> Position;

    /// Outcome notification hook for stateful strategies.
    fn game_over(&mut self, _result: &GameResult) {}
}
