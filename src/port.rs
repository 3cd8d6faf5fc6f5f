//! Port-level signals sampled and driven once per clock tick.

use crate::Word;

bitfield! {
    /// Input control lines of the queue.
    #[derive(Copy, Clone, Default, PartialEq, Eq)]
    pub struct Control(u8);
    impl Debug;
    /// Synchronous reset, dominant over both enables.
    pub reset, set_reset: 0;
    /// Enqueue the data bus this tick.
    pub write_enable, set_write_enable: 1;
    /// Dequeue onto the data bus this tick.
    pub read_enable, set_read_enable: 2;
}

bitfield! {
    /// Output status lines of the queue.
    ///
    /// `full` and `empty` describe the queue as it was when the tick was
    /// sampled, before this tick's write or read was applied.
    #[derive(Copy, Clone, Default, PartialEq, Eq)]
    pub struct Status(u8);
    impl Debug;
    /// No write can be accepted.
    pub full, set_full: 0;
    /// No read can be accepted.
    pub empty, set_empty: 1;
    /// A read was accepted and the data bus carries its value.
    pub read_valid, set_read_valid: 2;
}

// sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs<T> {
    pub control: Control,
    /// Write data bus, ignored unless `write_enable` is set.
    pub data: T,
}

impl<T: Word> Inputs<T> {
    pub fn idle() -> Self {
        Self { control: Control(0), data: T::default() }
    }

    pub fn reset() -> Self {
        let mut inputs = Self::idle();
        inputs.control.set_reset(true);
        inputs
    }

    pub fn write(data: T) -> Self {
        let mut control = Control(0);
        control.set_write_enable(true);
        Self { control, data }
    }

    pub fn read() -> Self {
        let mut inputs = Self::idle();
        inputs.control.set_read_enable(true);
        inputs
    }

    pub fn write_read(data: T) -> Self {
        let mut inputs = Self::write(data);
        inputs.control.set_read_enable(true);
        inputs
    }
}

/// What the queue drives back after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outputs<T> {
    pub status: Status,
    /// Read data bus. Holds its previous value when no read was accepted.
    pub data: T,
}

impl<T: Word> Outputs<T> {
    pub fn read(&self) -> Option<T> {
        if self.status.read_valid() {
            Some(self.data)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPort<T> {
    pub valid: bool,
    pub value: T,
}

impl<T: Word> ReadPort<T> {
    pub fn value(&self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}
