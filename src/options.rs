use std::sync::atomic::{AtomicBool, Ordering};

static CHESS960: AtomicBool = AtomicBool::new(false);

/// Whether the `UCI_Chess960` option is on. Consulted during FEN
/// parsing and emission, move fill-in and castle generation.
#[inline]
pub fn chess960() -> bool {
    CHESS960.load(Ordering::Relaxed)
}

/// Flip the `UCI_Chess960` option. By contract this happens only
/// between games, never while a position operation is in flight.
pub fn set_chess960(on: bool) {
    CHESS960.store(on, Ordering::Relaxed);
}
