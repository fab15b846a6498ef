pub mod board;
pub mod flood;
pub mod palette;
pub mod state;

pub use board::Board;
pub use palette::Palette;
pub use state::{Game, Phase, Status};
