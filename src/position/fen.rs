//! FEN parsing and emission, including the Shredder/X-FEN castling
//! letters Chess960 positions need. The two directions are exact
//! inverses: `parse(emit(p)) == p` structurally, and canonical input
//! strings re-emit byte for byte.

use super::fen_tables::{glyph_to_piece, piece_to_glyph};
use super::{castle_bit, Army, PieceKind, Position};
use crate::error::ParseError;
use crate::moves::notation;
use crate::moves::types::CastleSide;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, ParseError> {
        parse_fen(fen)
    }

    /// Replace this position with the one described by `fen`. On
    /// failure the position is left empty but well-formed.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), ParseError> {
        match parse_fen(fen) {
            Ok(position) => {
                *self = position;
                Ok(())
            }
            Err(error) => {
                *self = Position::empty();
                Err(error)
            }
        }
    }

    /// Serialize to FEN. The castling field uses `KQkq` letters when
    /// the castling rook is the outermost rook on its side of the king
    /// (always true in standard chess) and the rook's file letter
    /// otherwise. With `include_move_numbers` off only the four
    /// mandatory fields are emitted.
    pub fn to_fen(&self, include_move_numbers: bool) -> String {
        let mut white_rooks = Vec::new();
        let mut black_rooks = Vec::new();
        let mut white_king = Square::INVALID;
        let mut black_king = Square::INVALID;

        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut text = String::new();
            let mut blank = 0;
            for file in 0..8 {
                let square = Square::new(file, rank);
                let army = if self.has_piece_at(square, Army::White) {
                    Army::White
                } else if self.has_piece_at(square, Army::Black) {
                    Army::Black
                } else {
                    blank += 1;
                    continue;
                };

                if blank > 0 {
                    text.push_str(&blank.to_string());
                    blank = 0;
                }
                let kind = self.piece_kind_at(square);
                text.push(piece_to_glyph(kind, army));

                match (kind, army) {
                    (PieceKind::Rook, Army::White) => white_rooks.push(square),
                    (PieceKind::Rook, Army::Black) => black_rooks.push(square),
                    (PieceKind::King, Army::White) => white_king = square,
                    (PieceKind::King, Army::Black) => black_king = square,
                    _ => {}
                }
            }
            if blank > 0 {
                text.push_str(&blank.to_string());
            }
            ranks.push(text);
        }

        white_rooks.sort_by_key(|sq| sq.file());
        black_rooks.sort_by_key(|sq| sq.file());

        let mut fen = ranks.join("/");
        fen.push(' ');
        fen.push(match self.active_army() {
            Army::White => 'w',
            Army::Black => 'b',
        });
        fen.push(' ');

        let mut castling = String::new();
        if self.is_castle_available(Army::White, CastleSide::KingSide) {
            castling.push(
                castling_to_fen(
                    CastleSide::KingSide,
                    white_king,
                    &white_rooks,
                    self.file_of_kings_rook(),
                )
                .to_ascii_uppercase(),
            );
        }
        if self.is_castle_available(Army::White, CastleSide::QueenSide) {
            castling.push(
                castling_to_fen(
                    CastleSide::QueenSide,
                    white_king,
                    &white_rooks,
                    self.file_of_queens_rook(),
                )
                .to_ascii_uppercase(),
            );
        }
        if self.is_castle_available(Army::Black, CastleSide::KingSide) {
            castling.push(castling_to_fen(
                CastleSide::KingSide,
                black_king,
                &black_rooks,
                self.file_of_kings_rook(),
            ));
        }
        if self.is_castle_available(Army::Black, CastleSide::QueenSide) {
            castling.push(castling_to_fen(
                CastleSide::QueenSide,
                black_king,
                &black_rooks,
                self.file_of_queens_rook(),
            ));
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&castling);
        fen.push(' ');

        if self.en_passant_target().is_valid() {
            fen.push_str(&self.en_passant_target().to_string());
        } else {
            fen.push('-');
        }

        if include_move_numbers {
            fen.push(' ');
            fen.push_str(&self.half_move_clock().to_string());
            fen.push(' ');
            let fullmove = (self.half_move_number() + 1) / 2;
            fen.push_str(&fullmove.to_string());
        }

        fen
    }
}

fn parse_fen(fen: &str) -> Result<Position, ParseError> {
    let mut position = Position::empty();

    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParseError::NotEnoughFields(fields.len()));
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::BadRankCount(ranks.len()));
    }

    let mut white_rooks: Vec<Square> = Vec::new();
    let mut black_rooks: Vec<Square> = Vec::new();
    let mut white_king = Square::INVALID;
    let mut black_king = Square::INVALID;

    for (i, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0u8;
        for c in rank_text.chars() {
            if let Some(run) = c.to_digit(10) {
                file = file.saturating_add(run as u8);
                continue;
            }
            let (kind, army) =
                glyph_to_piece(c).ok_or(ParseError::UnknownGlyph(c))?;
            let square = Square::new(file, rank);
            if !square.is_valid() {
                return Err(ParseError::RankOverflow(rank + 1));
            }
            position.toggle_piece_at(square, army, kind, true);

            match (kind, army) {
                (PieceKind::Rook, Army::White) => white_rooks.push(square),
                (PieceKind::Rook, Army::Black) => black_rooks.push(square),
                (PieceKind::King, Army::White) => white_king = square,
                (PieceKind::King, Army::Black) => black_king = square,
                _ => {}
            }
            file += 1;
        }
        if file > 8 {
            return Err(ParseError::RankOverflow(rank + 1));
        }
    }

    if !white_king.is_valid() {
        return Err(ParseError::MissingKing(Army::White));
    }
    if !black_king.is_valid() {
        return Err(ParseError::MissingKing(Army::Black));
    }

    white_rooks.sort_by_key(|sq| sq.file());
    black_rooks.sort_by_key(|sq| sq.file());

    position.active_army = if fields[1] == "w" {
        Army::White
    } else {
        Army::Black
    };

    let castling = fields[2];
    if castling != "-" {
        for c in castling.chars() {
            let army = if c.is_ascii_uppercase() {
                Army::White
            } else {
                Army::Black
            };
            let (king, rooks) = match army {
                Army::White => (white_king, &white_rooks),
                Army::Black => (black_king, &black_rooks),
            };
            let Some((side, rook)) = castling_from_fen(c.to_ascii_lowercase(), king, rooks)
            else {
                tracing::debug!(glyph = %c, "unresolvable castling glyph, skipping");
                continue;
            };
            position.castle_rights |= castle_bit(army, side);
            if rook.is_valid() {
                match side {
                    CastleSide::KingSide => position.file_of_kings_rook = rook.file(),
                    CastleSide::QueenSide => position.file_of_queens_rook = rook.file(),
                }
            }
        }
    }

    if fields[3] != "-" {
        position.en_passant_target = fields[3].parse()?;
    }

    if fields.len() > 4 {
        position.half_move_clock = fields[4].parse().unwrap_or(0);
    }
    if fields.len() > 5 {
        // FEN counts full moves from 1; internally we count plies.
        let fullmove: u16 = fields[5].parse().unwrap_or(1);
        position.half_move_number = fullmove * 2;
    }

    Ok(position)
}

/// Resolve one castling-field character against the back rank: `k` and
/// `q` bind the outermost rook on that side of the king, a file letter
/// binds the rook standing on that file (Shredder/X-FEN). Rights from
/// fabricated FENs without a matching rook are granted with no rook
/// file recorded.
fn castling_from_fen(c: char, king: Square, rooks: &[Square]) -> Option<(CastleSide, Square)> {
    if rooks.is_empty() || !king.is_valid() {
        let side = if c == 'k' {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        };
        return Some((side, Square::INVALID));
    }

    match c {
        'k' => {
            let rook = rooks.iter().rev().find(|sq| sq.file() > king.file());
            Some((CastleSide::KingSide, rook.copied().unwrap_or(Square::INVALID)))
        }
        'q' => {
            let rook = rooks.iter().find(|sq| sq.file() < king.file());
            Some((CastleSide::QueenSide, rook.copied().unwrap_or(Square::INVALID)))
        }
        _ => {
            let file = notation::char_to_file(c)?;
            let rook = rooks.iter().find(|sq| sq.file() == file)?;
            let side = if rook.file() > king.file() {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            Some((side, *rook))
        }
    }
}

/// The inverse: `k`/`q` when the recorded castling rook is the
/// outermost rook on its side, otherwise its file letter.
fn castling_to_fen(side: CastleSide, king: Square, rooks: &[Square], rook_file: u8) -> char {
    if rooks.is_empty() || !king.is_valid() {
        return match side {
            CastleSide::KingSide => 'k',
            CastleSide::QueenSide => 'q',
        };
    }

    let outermost = match side {
        CastleSide::KingSide => rooks.iter().rev().find(|sq| sq.file() > king.file()),
        CastleSide::QueenSide => rooks.iter().find(|sq| sq.file() < king.file()),
    };
    match outermost {
        Some(rook) if rook.file() == rook_file => match side {
            CastleSide::KingSide => 'k',
            CastleSide::QueenSide => 'q',
        },
        _ => notation::file_to_char(rook_file),
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen(true))
    }
}
