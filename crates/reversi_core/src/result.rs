//! Terminal game classification.

use crate::board::Board;
use crate::score::Score;
use crate::types::PlayerColor;

/// Identity snapshot of a participant: who they were and which color
/// they held when the game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// The outcome of a finished game, with a copy of the final board.
///
/// Constructed exactly once, when the game loop reaches its terminal
/// state; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The winner ended with strictly more discs.
    WinByScore {
        winner: PlayerInfo,
        loser: PlayerInfo,
        score: Score,
        board: Board,
    },
    /// The loser returned an illegal move and forfeited.
    WinByOpponentMistake {
        winner: PlayerInfo,
        loser: PlayerInfo,
        score: Score,
        board: Board,
    },
    /// Both players ended with the same number of discs.
    Tie { score: Score, board: Board },
}

impl GameResult {
    pub fn winner(&self) -> Option<&PlayerInfo> {
        match self {
            GameResult::WinByScore { winner, .. }
            | GameResult::WinByOpponentMistake { winner, .. } => Some(winner),
            GameResult::Tie { .. } => None,
        }
    }

    pub fn loser(&self) -> Option<&PlayerInfo> {
        match self {
            GameResult::WinByScore { loser, .. }
            | GameResult::WinByOpponentMistake { loser, .. } => Some(loser),
            GameResult::Tie { .. } => None,
        }
    }

    pub fn score(&self) -> Score {
        match self {
            GameResult::WinByScore { score, .. }
            | GameResult::WinByOpponentMistake { score, .. }
            | GameResult::Tie { score, .. } => *score,
        }
    }

    pub fn board(&self) -> &Board {
        match self {
            GameResult::WinByScore { board, .. }
            | GameResult::WinByOpponentMistake { board, .. }
            | GameResult::Tie { board, .. } => board,
        }
    }

    /// Human-readable outcome paragraph.
    pub fn summary(&self) -> String {
        match self {
            GameResult::WinByScore { winner, score, .. } => format!(
                "{} ({}) won.\nThe score was {}.",
                winner.name,
                winner.color,
                score.display_for(winner.color)
            ),
            GameResult::WinByOpponentMistake { winner, .. } => format!(
                "{} ({}) won.\nThe opponent made an invalid move.",
                winner.name, winner.color
            ),
            GameResult::Tie { score, .. } => format!(
                "The game was a tie.\nThe score was {}.",
                score.display_for(PlayerColor::Dark)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_info() -> PlayerInfo {
        PlayerInfo::new("dark_player", PlayerColor::Dark)
    }

    fn light_info() -> PlayerInfo {
        PlayerInfo::new("light_player", PlayerColor::Light)
    }

    #[test]
    fn win_by_score_summary_uses_winner_perspective() {
        let result = GameResult::WinByScore {
            winner: dark_info(),
            loser: light_info(),
            score: Score::new(44, 20, 0),
            board: Board::new(),
        };
        assert_eq!(
            result.summary(),
            "dark_player (dark) won.\nThe score was 44:20."
        );

        let result = GameResult::WinByScore {
            winner: light_info(),
            loser: dark_info(),
            score: Score::new(24, 40, 0),
            board: Board::new(),
        };
        assert_eq!(
            result.summary(),
            "light_player (light) won.\nThe score was 40:24."
        );
    }

    #[test]
    fn mistake_summary_names_the_offense() {
        let result = GameResult::WinByOpponentMistake {
            winner: dark_info(),
            loser: light_info(),
            score: Score::new(24, 40, 0),
            board: Board::new(),
        };
        assert_eq!(
            result.summary(),
            "dark_player (dark) won.\nThe opponent made an invalid move."
        );
    }

    #[test]
    fn tie_summary_reports_dark_first() {
        let result = GameResult::Tie {
            score: Score::new(32, 32, 0),
            board: Board::new(),
        };
        assert_eq!(
            result.summary(),
            "The game was a tie.\nThe score was 32:32."
        );
        assert_eq!(result.winner(), None);
        assert_eq!(result.loser(), None);
    }
}
