use crate::position::Army;
use thiserror::Error;

/// Errors surfaced while parsing a FEN record. A failed parse leaves
/// the target position empty but well-formed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than the four mandatory fields.
    #[error("FEN has {0} fields, expected at least 4")]
    NotEnoughFields(usize),

    /// Piece placement does not describe eight ranks.
    #[error("FEN piece placement has {0} ranks, expected 8")]
    BadRankCount(usize),

    /// A rank ran past the h-file.
    #[error("rank {0} of the piece placement spills past the h-file")]
    RankOverflow(u8),

    /// Unrecognized character in the piece placement field.
    #[error("unrecognized character {0:?} in piece placement")]
    UnknownGlyph(char),

    /// A square field (en passant) that is not algebraic notation.
    #[error("malformed square {0:?}")]
    BadSquare(String),

    /// The placement is missing a king.
    #[error("no {0:?} king on the board")]
    MissingKing(Army),
}
