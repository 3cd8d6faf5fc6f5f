//! Clocked single-producer/single-consumer FIFO.
//!
//! A [`RingQueue`] holds `N` elements and is advanced one tick at a time. Each
//! tick samples full/empty first, then applies at most one write and at most
//! one read. Overflowing writes and underflowing reads are dropped silently.

#[macro_use]
extern crate bitfield;

pub mod config;
pub mod cursor;
pub mod port;
pub mod ring_queue;
pub mod shared;
pub mod testbench;
pub mod word;

pub use config::{Config, ConfigError};
pub use cursor::Cursor;
pub use port::{Control, Inputs, Outputs, ReadPort, Status};
pub use ring_queue::RingQueue;
pub use shared::{Consumer, Producer, QueueStatus, SharedQueue};
pub use testbench::{reference_stimulus, Sample, Testbench, Trace};
pub use word::Word;
