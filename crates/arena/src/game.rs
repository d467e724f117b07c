//! The turn-driven game loop.

use reversi_core::{
    Board, GameResult, InitialState, Player, PlayerColor, PlayerInfo, Score,
};

use crate::notifier::Notifier;

/// The two seats of a match. Both are always occupied.
///
/// The pair owns its players for the duration of the match; rotation
/// swaps which box holds which seat rather than moving the players.
pub struct Players {
    dark: Box<dyn Player>,
    light: Box<dyn Player>,
}

impl Players {
    pub fn new(dark: Box<dyn Player>, light: Box<dyn Player>) -> Self {
        let mut players = Self { dark, light };
        players.assign_colors();
        players
    }

    pub fn dark_player(&self) -> &dyn Player {
        self.dark.as_ref()
    }

    pub fn light_player(&self) -> &dyn Player {
        self.light.as_ref()
    }

    pub fn player(&self, color: PlayerColor) -> &dyn Player {
        match color {
            PlayerColor::Dark => self.dark.as_ref(),
            PlayerColor::Light => self.light.as_ref(),
        }
    }

    fn player_mut(&mut self, color: PlayerColor) -> &mut dyn Player {
        match color {
            PlayerColor::Dark => self.dark.as_mut(),
            PlayerColor::Light => self.light.as_mut(),
        }
    }

    /// Exchange the seats, so the previous dark player takes light and
    /// vice versa. Colors are reassigned immediately.
    pub fn swap_dark_and_light(&mut self) {
        std::mem::swap(&mut self.dark, &mut self.light);
        self.assign_colors();
    }

    fn assign_colors(&mut self) {
        self.dark.start_game(PlayerColor::Dark);
        self.light.start_game(PlayerColor::Light);
    }
}

/// Lifecycle of a [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

/// Drives two players through a full game to a classified result.
///
/// The game owns the authoritative board; players and notifiers only
/// ever see shared references to it.
pub struct Game {
    players: Players,
    notifier: Box<dyn Notifier>,
    opening: InitialState,
    board: Board,
    current: PlayerColor,
    phase: GamePhase,
    result: Option<GameResult>,
}

impl Game {
    pub fn new(players: Players, notifier: Box<dyn Notifier>) -> Self {
        Self {
            players,
            notifier,
            opening: InitialState::CenterSquare,
            board: Board::new(),
            current: PlayerColor::Dark,
            phase: GamePhase::NotStarted,
            result: None,
        }
    }

    /// Opening used by subsequent `new_game` calls.
    pub fn set_opening(&mut self, opening: InitialState) {
        self.opening = opening;
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Snapshot of the current board.
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The result of the last finished game, if any.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Start a new game: optionally rotate the seats, assign colors,
    /// set up the opening and hand the turn to dark.
    pub fn new_game(&mut self, swap_players: bool) {
        if swap_players {
            self.players.swap_dark_and_light();
        } else {
            self.players.assign_colors();
        }
        self.board.initialize(self.opening);
        self.current = PlayerColor::Dark;
        self.result = None;
        self.phase = GamePhase::InProgress;
        self.notifier.note_new_game(&self.players, &self.board);
    }

    /// Run turns until the game finishes and return the result.
    ///
    /// Panics if called before the first `new_game`. Calling it again
    /// on a finished game returns the stored result unchanged.
    pub fn run_game_loop(&mut self) -> &GameResult {
        while self.phase == GamePhase::InProgress {
            self.play_one_turn();
        }
        self.result
            .as_ref()
            .expect("run_game_loop called before new_game")
    }

    fn play_one_turn(&mut self) {
        let color = self.current;
        let moves = self.board.find_valid_moves(color);

        if moves.is_empty() {
            if self.board.find_valid_moves(color.other()).is_empty() {
                // Neither side can move: score the board as it stands.
                self.finish(self.result_from_score());
            } else {
                // Pass: the opponent moves on an unchanged board.
                self.current = color.other();
            }
            return;
        }

        let pos = self.players.player_mut(color).pick_move(&self.board);
        if !moves.contains(&pos) {
            self.finish(self.result_from_mistake(color));
            return;
        }

        self.board.play_move(color, pos);
        self.notifier
            .note_move(self.players.player(color), pos, &self.board);
        self.current = color.other();
    }

    fn participant(&self, color: PlayerColor) -> PlayerInfo {
        PlayerInfo::new(self.players.player(color).name(), color)
    }

    fn result_from_score(&self) -> GameResult {
        let score = Score::for_board(&self.board);
        match score.winner() {
            Some(color) => GameResult::WinByScore {
                winner: self.participant(color),
                loser: self.participant(color.other()),
                score,
                board: self.board,
            },
            None => GameResult::Tie {
                score,
                board: self.board,
            },
        }
    }

    fn result_from_mistake(&self, offender: PlayerColor) -> GameResult {
        let winner = offender.other();
        GameResult::WinByOpponentMistake {
            winner: self.participant(winner),
            loser: self.participant(offender),
            score: Score::for_board(&self.board),
            board: self.board,
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.notifier.note_result(&result);
        self.players
            .player_mut(PlayerColor::Dark)
            .game_over(&result);
        self.players
            .player_mut(PlayerColor::Light)
            .game_over(&result);
        self.result = Some(result);
        self.phase = GamePhase::Finished;
    }

    /// Start a game from an arbitrary board state instead of the
    /// configured opening, with dark to move.
    #[cfg(test)]
    pub(crate) fn new_game_from_board(&mut self, board: Board) {
        self.players.assign_colors();
        self.board = board;
        self.current = PlayerColor::Dark;
        self.result = None;
        self.phase = GamePhase::InProgress;
        self.notifier.note_new_game(&self.players, &self.board);
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
