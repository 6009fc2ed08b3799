//! FEN glyph <-> (piece, army) maps. Upper-case is White.

use super::{Army, PieceKind};

pub(super) fn glyph_to_piece(c: char) -> Option<(PieceKind, Army)> {
    let army = if c.is_ascii_uppercase() {
        Army::White
    } else {
        Army::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((kind, army))
}

pub(super) fn piece_to_glyph(kind: PieceKind, army: Army) -> char {
    let c = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
        PieceKind::Unknown => '?',
    };
    if army == Army::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for glyph in ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'] {
            let (kind, army) = glyph_to_piece(glyph).expect("canonical glyph");
            assert_eq!(piece_to_glyph(kind, army), glyph);
        }
        assert!(glyph_to_piece('x').is_none());
        assert!(glyph_to_piece('1').is_none());
    }
}
