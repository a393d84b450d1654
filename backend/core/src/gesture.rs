//! Fixed-capacity timestamp window for repeated gestures.

use serde::{Deserialize, Serialize};

/// Number of timestamps a window holds.
pub const WINDOW_CAPACITY: usize = 5;

/// Ring buffer of the last [`WINDOW_CAPACITY`] gesture ticks (milliseconds).
///
/// Starts filled with zero sentinels. Every push evicts the oldest entry, so
/// the window always holds exactly five values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureWindow {
    ticks: [u64; WINDOW_CAPACITY],
    /// Index of the oldest entry.
    head: usize,
}

impl GestureWindow {
    pub fn new() -> Self {
        Self {
            ticks: [0; WINDOW_CAPACITY],
            head: 0,
        }
    }

    /// Evict the oldest tick and append `tick` as the newest.
    pub fn push(&mut self, tick: u64) {
        self.ticks[self.head] = tick;
        self.head = (self.head + 1) % WINDOW_CAPACITY;
    }

    pub fn oldest(&self) -> u64 {
        self.ticks[self.head]
    }

    pub fn newest(&self) -> u64 {
        self.ticks[(self.head + WINDOW_CAPACITY - 1) % WINDOW_CAPACITY]
    }

    /// Span between the oldest and newest entries. Sentinels count as tick 0.
    pub fn elapsed(&self) -> u64 {
        self.newest().saturating_sub(self.oldest())
    }

    /// Back to all-zero sentinels.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_idle(&self) -> bool {
        self.ticks.iter().all(|&t| t == 0)
    }

    /// Entries in insertion order, oldest first.
    pub fn to_vec(&self) -> Vec<u64> {
        (0..WINDOW_CAPACITY)
            .map(|i| self.ticks[(self.head + i) % WINDOW_CAPACITY])
            .collect()
    }
}

impl Default for GestureWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Open interval `(min_ms, max_ms)` a window span must fall in to earn the bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl BonusWindow {
    pub fn contains(&self, elapsed: u64) -> bool {
        elapsed > self.min_ms && elapsed < self.max_ms
    }
}

impl Default for BonusWindow {
    fn default() -> Self {
        Self {
            min_ms: 1500,
            max_ms: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_evicts_oldest_first() {
        let mut w = GestureWindow::new();
        for t in [10, 20, 30, 40, 50, 60] {
            w.push(t);
        }
        assert_eq!(w.to_vec(), vec![20, 30, 40, 50, 60]);
        assert_eq!(w.oldest(), 20);
        assert_eq!(w.newest(), 60);
        assert_eq!(w.elapsed(), 40);
    }

    #[test]
    fn sentinels_count_as_zero() {
        let mut w = GestureWindow::new();
        w.push(100);
        assert_eq!(w.to_vec(), vec![0, 0, 0, 0, 100]);
        assert_eq!(w.elapsed(), 100);
    }

    #[test]
    fn reset_restores_sentinels() {
        let mut w = GestureWindow::new();
        w.push(5);
        w.push(9);
        assert!(!w.is_idle());
        w.reset();
        assert!(w.is_idle());
        assert_eq!(w.to_vec(), vec![0; WINDOW_CAPACITY]);
    }

    #[test]
    fn bonus_window_is_open_on_both_ends() {
        let window = BonusWindow::default();
        assert!(!window.contains(1500));
        assert!(window.contains(1501));
        assert!(window.contains(2999));
        assert!(!window.contains(3000));
    }
}
