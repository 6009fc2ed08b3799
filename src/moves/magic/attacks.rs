//! Scan-based sliding attacks. These are the ground truth the magic
//! tables are filled from; lookups must agree with them exactly.

use crate::bitboard::BitBoard;

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn slide(square: u8, blockers: BitBoard, dirs: &[(i8, i8); 4]) -> BitBoard {
    let rank = (square / 8) as i8;
    let file = (square % 8) as i8;
    let mut attacks = BitBoard::EMPTY;

    for &(dr, df) in dirs {
        let mut r = rank + dr;
        let mut f = file + df;
        // Extend until (and including) the first blocker.
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let sq = (r * 8 + f) as u8;
            attacks.set(sq, true);
            if blockers.test(sq) {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

#[inline]
pub fn rook_attacks(square: u8, blockers: BitBoard) -> BitBoard {
    slide(square, blockers, &ROOK_DIRS)
}

#[inline]
pub fn bishop_attacks(square: u8, blockers: BitBoard) -> BitBoard {
    slide(square, blockers, &BISHOP_DIRS)
}
