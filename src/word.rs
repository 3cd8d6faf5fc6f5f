//! Element words stored in the queue.

use core::fmt::Debug;

use sealed::sealed;

/// Unsigned machine word usable as a queue element.
///
/// Sealed: only `u8`, `u16`, `u32` and `u64` are data buses the queue knows
/// how to truncate to a narrower logical width.
#[sealed]
pub trait Word: Copy + Default + Eq + Debug {
    /// Width of the container in bits.
    const BITS: u32;

    /// Keeps the low `width` bits. A width at or above `BITS` is a no-op.
    fn truncate(self, width: u32) -> Self;
}

#[sealed]
impl Word for u8 {
    const BITS: u32 = u8::BITS;

    #[inline]
    fn truncate(self, width: u32) -> Self {
        if width >= Self::BITS { self } else { self & ((1 << width) - 1) }
    }
}

#[sealed]
impl Word for u16 {
    const BITS: u32 = u16::BITS;

    #[inline]
    fn truncate(self, width: u32) -> Self {
        if width >= Self::BITS { self } else { self & ((1 << width) - 1) }
    }
}

#[sealed]
impl Word for u32 {
    const BITS: u32 = u32::BITS;

    #[inline]
    fn truncate(self, width: u32) -> Self {
        if width >= Self::BITS { self } else { self & ((1 << width) - 1) }
    }
}

#[sealed]
impl Word for u64 {
    const BITS: u32 = u64::BITS;

    #[inline]
    fn truncate(self, width: u32) -> Self {
        if width >= Self::BITS { self } else { self & ((1 << width) - 1) }
    }
}
