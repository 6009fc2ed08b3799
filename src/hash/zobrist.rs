//! Zobrist fingerprints: a lazily built, process-wide table of
//! pseudo-random keys xored together per position feature. The seed is
//! fixed so two processes agree on every hash.

use crate::moves::types::CastleSide;
use crate::position::{Army, PieceKind, Position};
use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const ZOBRIST_SEED: u64 = 0x7C33_0915_D4B8_1AE6;

pub struct ZobristKeys {
    /// [army][piece][square], {White=0, Black=1}, {P,N,B,R,Q,K}=0..5.
    pub piece: [[[u64; 64]; 6]; 2],
    pub side_to_move: u64,
    /// K, Q, k, q order.
    pub castling: [u64; 4],
    /// a..h => 0..7.
    pub ep_file: [u64; 8],
}

/// The global key table, generated on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_keys(StdRng::seed_from_u64(ZOBRIST_SEED)))
}

fn generate_keys(mut rng: StdRng) -> ZobristKeys {
    // Zero keys would make features invisible to the xor.
    let mut non_zero = || loop {
        let value = rng.next_u64();
        if value != 0 {
            return value;
        }
    };

    let mut keys = ZobristKeys {
        piece: [[[0u64; 64]; 6]; 2],
        side_to_move: 0,
        castling: [0u64; 4],
        ep_file: [0u64; 8],
    };

    for army in 0..2 {
        for piece in 0..6 {
            for square in 0..64 {
                keys.piece[army][piece][square] = non_zero();
            }
        }
    }
    for key in keys.castling.iter_mut() {
        *key = non_zero();
    }
    for key in keys.ep_file.iter_mut() {
        *key = non_zero();
    }
    keys.side_to_move = non_zero();
    keys
}

/// The 64-bit fingerprint of `position`: xor of one key per occupied
/// (piece, army, square), per live castle right, the en-passant file
/// when a target is set, and the side key when Black is to move.
/// Structurally equal positions always hash equal.
pub fn hash(position: &Position) -> u64 {
    let keys = zobrist_keys();
    let mut h = 0u64;

    for army in [Army::White, Army::Black] {
        let own = position.army_board(army);
        for kind in PieceKind::ALL {
            for square in (position.board(kind) & own).iter() {
                h ^= keys.piece[army as usize][kind as usize][square.index() as usize];
            }
        }
    }

    if position.active_army() == Army::Black {
        h ^= keys.side_to_move;
    }

    let rights = [
        (Army::White, CastleSide::KingSide),
        (Army::White, CastleSide::QueenSide),
        (Army::Black, CastleSide::KingSide),
        (Army::Black, CastleSide::QueenSide),
    ];
    for (i, &(army, side)) in rights.iter().enumerate() {
        if position.is_castle_available(army, side) {
            h ^= keys.castling[i];
        }
    }

    let ep = position.en_passant_target();
    if ep.is_valid() {
        h ^= keys.ep_file[ep.file() as usize];
    }

    h
}
