use rand::{rngs::StdRng, SeedableRng};
use ratatui::style::Color;
use tracing::{debug, info, instrument, trace};

use crate::constants::{GRID_SIZE, PALETTE_SIZE, TURN_LIMIT};
use crate::error::GameError;
use crate::game::board::Board;
use crate::game::flood::flood_origin;
use crate::game::palette::Palette;

/// Lifecycle of a single game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Fresh,
    InPlay,
    Won,
    Lost,
}

/// Result of submitting a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    InPlay,
    Won,
    Lost,
}

/// The whole game model: palette, board, turn counter and phase.
///
/// Owned by the front end and confined to its event thread. Every
/// operation runs to completion without blocking.
pub struct Game {
    palette: Palette,
    board: Board,
    turns_used: u32,
    turn_limit: u32,
    phase: Phase,
    rng: StdRng,
    seed: Option<u64>,
}

impl Game {
    pub fn new() -> Self {
        Self::build(StdRng::from_entropy(), None)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(StdRng::seed_from_u64(seed), Some(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self::build(rng, None)
    }

    fn build(mut rng: StdRng, seed: Option<u64>) -> Self {
        let palette = Palette::random(&mut rng);
        let board = Board::random(GRID_SIZE, PALETTE_SIZE, &mut rng);
        let game = Self {
            palette,
            board,
            turns_used: 0,
            turn_limit: TURN_LIMIT,
            phase: Phase::Fresh,
            rng,
            seed,
        };
        info!(seed = ?game.seed, size = game.board.size(), "new game");
        game
    }

    /// Starts from a known layout instead of a random one.
    ///
    /// Later calls to [`Game::new_game`] keep the board's side length.
    /// Fails if the board is empty or holds an index the palette lacks.
    pub fn with_board(palette: Palette, board: Board) -> Result<Self, GameError> {
        if board.size() == 0 {
            return Err(GameError::MalformedBoard { reason: "board has no cells".into() });
        }
        if let Some(&index) = board.rows().flatten().find(|&&index| index >= palette.len()) {
            return Err(GameError::MalformedBoard {
                reason: format!("board holds palette index {} (palette has {} colors)", index, palette.len()),
            });
        }

        Ok(Self {
            palette,
            board,
            turns_used: 0,
            turn_limit: TURN_LIMIT,
            phase: Phase::Fresh,
            rng: StdRng::from_entropy(),
            seed: None,
        })
    }

    /// Regenerates palette and board in place and clears the turn counter.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.palette.randomize(&mut self.rng);
        self.board.randomize(self.palette.len(), &mut self.rng);
        self.turns_used = 0;
        self.phase = Phase::Fresh;
        info!(seed = ?self.seed, size = self.board.size(), "new game");
    }

    /// Floods the origin region with `index` and adjudicates the result.
    ///
    /// Picking the origin's current color, or moving after the game has
    /// ended, changes nothing and reports the current status.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<Status, GameError> {
        if index >= self.palette.len() {
            return Err(GameError::PaletteIndexOutOfRange { index, len: self.palette.len() });
        }
        if self.is_terminal() {
            trace!(phase = ?self.phase, "move ignored, game is over");
            return Ok(self.status());
        }
        if index == self.board.origin() {
            trace!("move ignored, origin already has this color");
            return Ok(self.status());
        }

        let filled = flood_origin(&mut self.board, index);
        self.turns_used += 1;

        self.phase = if self.board.is_uniform() {
            Phase::Won
        } else if self.turns_used > self.turn_limit() {
            Phase::Lost
        } else {
            Phase::InPlay
        };
        debug!(filled, turns_used = self.turns_used, phase = ?self.phase, "move applied");

        if self.is_terminal() {
            info!(turns_used = self.turns_used, phase = ?self.phase, "game over");
        }
        Ok(self.status())
    }

    /// Palette index at `(x, y)`; panics outside the board.
    pub fn cell(&self, x: usize, y: usize) -> usize {
        self.board.cell(x, y)
    }

    pub fn palette_color(&self, index: usize) -> Option<Color> {
        self.palette.color(index)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// Seed the generator was started from, if the game was seeded.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Fresh | Phase::InPlay => Status::InPlay,
            Phase::Won => Status::Won,
            Phase::Lost => Status::Lost,
        }
    }

    pub fn turns_label(&self) -> String {
        format!("Turns {}/{}", self.turns_used(), self.turn_limit())
    }

    pub fn outcome_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Won => Some("You Win!"),
            Phase::Lost => Some("You Lose!"),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
