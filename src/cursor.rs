//! Read/write cursors counting modulo `2 * N`.
//!
//! The upper half of the range acts as the lap bit: two cursors with the same
//! index but different laps are exactly `N` apart, which is how a full queue is
//! told apart from an empty one without a separate count.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<const N: usize> {
    raw: usize,
}

impl<const N: usize> Cursor<N> {
    pub const ZERO: Self = Self { raw: 0 };

    // in 0..2N
    #[inline]
    pub fn get(self) -> usize {
        self.raw
    }

    #[inline]
    pub fn index(self) -> usize {
        if N.is_power_of_two() {
            self.raw & (N - 1)
        } else if self.raw < N {
            self.raw
        } else {
            self.raw - N
        }
    }

    // the extra bit
    #[inline]
    pub fn lap(self) -> bool {
        self.raw >= N
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        let next = self.raw + 1;
        self.raw = if next == 2 * N { 0 } else { next };
    }

    /// Number of increments needed to move `from` onto `self`, modulo `2 * N`.
    #[inline]
    pub fn distance_from(self, from: Self) -> usize {
        if self.raw >= from.raw {
            self.raw - from.raw
        } else {
            self.raw + (2 * N - from.raw)
        }
    }
}
