//! Clocked single-port-pair ring queue.

use crate::{Config, ConfigError, Cursor, Inputs, Outputs, ReadPort, Status, Word};

/// Fixed-capacity FIFO advanced one clock tick at a time.
///
/// Writes to a full queue and reads from an empty queue are dropped without
/// any error; callers observe them only through the status flags.
#[derive(Debug, Clone)]
pub struct RingQueue<T: Word, const N: usize> {
    // this is from where we dequeue items
    rd_ptr: Cursor<N>,
    // where we enqueue new items
    wr_ptr: Cursor<N>,
    buffer: [T; N],
    width: u32,
    // read data register, holds the last accepted read
    dout: T,
}

impl<T: Word, const N: usize> RingQueue<T, N> {
    /// Creates an empty queue using the full width of `T`.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_width(T::BITS)
    }

    /// Creates an empty queue whose elements are truncated to `width` bits.
    pub fn with_width(width: u32) -> Result<Self, ConfigError> {
        Config::new(N, width).validate::<T>()?;
        Ok(Self { rd_ptr: Cursor::ZERO, wr_ptr: Cursor::ZERO, buffer: [T::default(); N], width, dout: T::default() })
    }

    pub fn config(&self) -> Config {
        Config::new(N, self.width)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rd_ptr == self.wr_ptr
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.wr_ptr.index() == self.rd_ptr.index() && self.wr_ptr.lap() != self.rd_ptr.lap()
    }

    /// Number of stored elements, `(wr_ptr - rd_ptr) mod 2N`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.wr_ptr.distance_from(self.rd_ptr)
    }

    #[inline]
    pub fn write_cursor(&self) -> Cursor<N> {
        self.wr_ptr
    }

    #[inline]
    pub fn read_cursor(&self) -> Cursor<N> {
        self.rd_ptr
    }

    pub fn peek(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.buffer[self.rd_ptr.index()])
        }
    }

    /// Returns both cursors to zero. Storage is left as is; stale slots are
    /// unreachable until overwritten.
    pub fn reset(&mut self) {
        log::debug!("reset: dropping {} element(s)", self.depth());
        self.rd_ptr = Cursor::ZERO;
        self.wr_ptr = Cursor::ZERO;
    }

    /// Advances the queue by one tick.
    ///
    /// Full and empty are sampled before anything moves, so a write and a read
    /// in the same tick act on the pre-tick state: the read returns the old
    /// front, never the value written alongside it.
    pub fn tick(&mut self, write_requested: bool, write_value: T, read_requested: bool) -> ReadPort<T> {
        let full = self.is_full();
        let empty = self.is_empty();

        let valid = if read_requested && !empty {
            self.dout = self.buffer[self.rd_ptr.index()];
            self.rd_ptr.advance();
            true
        } else {
            if read_requested {
                log::trace!("read dropped: queue empty");
            }
            false
        };

        if write_requested && !full {
            self.buffer[self.wr_ptr.index()] = write_value.truncate(self.width);
            self.wr_ptr.advance();
        } else if write_requested {
            log::trace!("write of {:?} dropped: queue full", write_value);
        }

        debug_assert!(self.depth() <= N, "depth {} exceeds capacity {}", self.depth(), N);
        log::trace!("tick: wr={} rd={} depth={}", self.wr_ptr.get(), self.rd_ptr.get(), self.depth());

        ReadPort { valid, value: self.dout }
    }

    /// Port-level step: samples reset, both enables and the write bus at once.
    ///
    /// Reset wins over both enables; the status reported is the pre-tick one.
    pub fn clock(&mut self, inputs: Inputs<T>) -> Outputs<T> {
        let mut status = Status::default();
        status.set_full(self.is_full());
        status.set_empty(self.is_empty());

        if inputs.control.reset() {
            self.reset();
            return Outputs { status, data: self.dout };
        }

        let read = self.tick(inputs.control.write_enable(), inputs.data, inputs.control.read_enable());
        status.set_read_valid(read.valid);
        Outputs { status, data: read.value }
    }
}
