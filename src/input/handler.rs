use crossterm::event::{KeyCode, KeyEventKind};
use tracing::warn;

use crate::constants::PALETTE_SIZE;
use crate::game::Game;

/// Which palette button the cursor is on.
#[derive(Debug, Default)]
pub struct InputState {
    pub selected: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_left(&mut self) {
        self.selected = (self.selected + PALETTE_SIZE - 1) % PALETTE_SIZE;
    }

    pub fn select_right(&mut self) {
        self.selected = (self.selected + 1) % PALETTE_SIZE;
    }
}

pub fn handle_input(game: &mut Game, input: &mut InputState, key_code: KeyCode, kind: KeyEventKind) {
    if kind != KeyEventKind::Press {
        return;
    }

    match key_code {
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            input.selected = index;
            submit(game, index);
        }
        KeyCode::Left => input.select_left(),
        KeyCode::Right => input.select_right(),
        KeyCode::Enter | KeyCode::Char(' ') => submit(game, input.selected),
        KeyCode::Char('n') | KeyCode::Char('N') => game.new_game(),
        _ => {}
    }
}

fn submit(game: &mut Game, index: usize) {
    if let Err(err) = game.apply_move(index) {
        warn!(%err, "move rejected");
    }
}
