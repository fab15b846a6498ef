use derive_more::{Display, Error};

/// Errors raised by the game model.
///
/// Both variants describe caller mistakes; the model itself has no
/// recoverable runtime failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("palette index {index} is out of range (palette has {len} colors)")]
    PaletteIndexOutOfRange { index: usize, len: usize },

    #[display("malformed board: {reason}")]
    MalformedBoard { reason: String },
}
