//! Builds the rook and bishop magic tables at startup. The magic
//! numbers are found by a random sparse search seeded with a fixed
//! constant, so every process constructs identical tables.

use super::attacks::{bishop_attacks, rook_attacks};
use super::structs::{MagicEntry, SlidingTables};
use crate::bitboard::BitBoard;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const MAGIC_SEED: u64 = 0x41AC_2F19_6D83_E705;
const MAX_ATTEMPTS: u32 = 10_000_000;

/// Relevant-occupancy mask for a rook: its rays without the edge
/// squares (an edge blocker cannot shorten the attack set).
fn rook_mask(square: u8) -> u64 {
    let rank = (square / 8) as u32;
    let file = (square % 8) as u32;
    let mut mask = 0u64;
    for r in rank + 1..7 {
        mask |= 1u64 << (r * 8 + file);
    }
    for r in 1..rank {
        mask |= 1u64 << (r * 8 + file);
    }
    for f in file + 1..7 {
        mask |= 1u64 << (rank * 8 + f);
    }
    for f in 1..file {
        mask |= 1u64 << (rank * 8 + f);
    }
    mask
}

/// Relevant-occupancy mask for a bishop: diagonals clipped to the
/// inner 6x6 board.
fn bishop_mask(square: u8) -> u64 {
    let rank = (square / 8) as i8;
    let file = (square % 8) as i8;
    let mut mask = 0u64;
    for (dr, df) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let mut r = rank + dr;
        let mut f = file + df;
        while (1..7).contains(&r) && (1..7).contains(&f) {
            mask |= 1u64 << (r * 8 + f) as u32;
            r += dr;
            f += df;
        }
    }
    mask
}

/// Every subset of `mask`, via the carry-rippler walk.
fn blocker_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

/// Sparse candidates collide less often in the magic index.
#[inline]
fn sparse_u64(rng: &mut StdRng) -> u64 {
    rng.next_u64() & rng.next_u64() & rng.next_u64()
}

/// Try to fill a table with `magic`; fails on any destructive
/// collision (two blocker sets sharing an index with different
/// attacks).
fn try_fill(blockers: &[u64], attacks: &[BitBoard], magic: u64, shift: u32) -> Option<Box<[BitBoard]>> {
    let size = 1usize << (64 - shift);
    let mut table = vec![BitBoard::EMPTY; size];
    let mut used = vec![false; size];

    for (&blocker, &attack) in blockers.iter().zip(attacks) {
        let index = (blocker.wrapping_mul(magic) >> shift) as usize;
        if used[index] {
            if table[index] != attack {
                return None;
            }
        } else {
            used[index] = true;
            table[index] = attack;
        }
    }
    Some(table.into_boxed_slice())
}

fn find_entry(
    square: u8,
    mask: u64,
    reference: fn(u8, BitBoard) -> BitBoard,
    rng: &mut StdRng,
) -> MagicEntry {
    let blockers = blocker_subsets(mask);
    let attacks: Vec<BitBoard> = blockers
        .iter()
        .map(|&blocker| reference(square, BitBoard(blocker)))
        .collect();
    let shift = 64 - mask.count_ones();

    for _ in 0..MAX_ATTEMPTS {
        let magic = sparse_u64(rng);
        if let Some(table) = try_fill(&blockers, &attacks, magic, shift) {
            return MagicEntry {
                magic,
                shift,
                mask,
                table,
            };
        }
    }
    // With a sparse search over 2^12-entry tables this bound is
    // unreachable; hitting it means the generator itself is broken.
    unreachable!("no magic number found for square {square}")
}

/// Build the (rook, bishop) table pair. Called once per process by the
/// movegen initializer.
pub fn build_sliding_tables() -> (SlidingTables, SlidingTables) {
    let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
    let rook = SlidingTables {
        entries: (0..64)
            .map(|sq| find_entry(sq, rook_mask(sq), rook_attacks, &mut rng))
            .collect(),
    };
    let bishop = SlidingTables {
        entries: (0..64)
            .map(|sq| find_entry(sq, bishop_mask(sq), bishop_attacks, &mut rng))
            .collect(),
    };
    (rook, bishop)
}
