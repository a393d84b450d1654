//! Head-shake recovery bonus detection.

use chatline_core::{BonusWindow, Session};

/// Record a head shake at `tick`.
///
/// Only sitting players accumulate ticks. Returns the window span when it
/// lands inside `bonus`; the window is reset to sentinels in that case.
pub fn record_head_shake(session: &mut Session, tick: u64, bonus: BonusWindow) -> Option<u64> {
    if !session.is_sitting() {
        return None;
    }

    let window = session.head_shakes_mut();
    window.push(tick);
    let elapsed = window.elapsed();
    if bonus.contains(elapsed) {
        window.reset();
        Some(elapsed)
    } else {
        None
    }
}
