use crate::Armies;
use crate::TRADE_INCREMENT;
use crate::TRADE_SCHEDULE;

/// Armies awarded for the `nth` set traded in game-wide (1-indexed).
///
/// Follows the escalating 4, 6, 8, 10, 12, 15 progression, then +5 per trade.
pub fn award(nth: usize) -> Armies {
    debug_assert!(nth > 0);
    let last = TRADE_SCHEDULE.len();
    match nth {
        0 => 0,
        n if n <= last => TRADE_SCHEDULE[n - 1],
        n => TRADE_SCHEDULE[last - 1] + TRADE_INCREMENT * (n - last) as Armies,
    }
}
