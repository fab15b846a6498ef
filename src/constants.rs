pub const GRID_SIZE: usize = 14; // Cells per side of the board
pub const PALETTE_SIZE: usize = 6;
pub const TURN_LIMIT: u32 = 25;

pub const TITLE: &str = "Flood It!";

// Event poll interval for the main loop (milliseconds)
pub const POLL_INTERVAL: u64 = 50;
