//! Flood-It: flood the board from the top-left cell until it is one color.
//!
//! The model lives in [`game`]; [`input`] and [`ui`] are the terminal front
//! end driven by the `floodit` binary.

pub mod cli;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
