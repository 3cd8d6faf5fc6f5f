//! Ring queue shared between a producer and a consumer running on different
//! threads.
//!
//! Neither side touches the queue directly. Each stages its request for the
//! next tick, and whoever owns the clock samples both stages at one instant and
//! applies them as a single tick under the lock. A tick is therefore never
//! observed half applied.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Inputs, Outputs, RingQueue, Word};

#[derive(Debug)]
struct Shared<T: Word, const N: usize> {
    queue: RingQueue<T, N>,
    staged: Inputs<T>,
    // value accepted by the last tick, waiting for the consumer
    read_result: Option<T>,
    handed_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStatus {
    pub full: bool,
    pub empty: bool,
    pub depth: usize,
}

/// Clocked queue with staged producer and consumer requests.
#[derive(Debug)]
pub struct SharedQueue<T: Word, const N: usize> {
    inner: Mutex<Shared<T, N>>,
}

impl<T: Word, const N: usize> SharedQueue<T, N> {
    pub fn new(queue: RingQueue<T, N>) -> Self {
        Self { inner: Mutex::new(Shared { queue, staged: Inputs::idle(), read_result: None, handed_out: false }) }
    }

    // A panic while holding the lock cannot leave a tick half applied, so a
    // poisoned lock still guards a consistent queue.
    fn lock(&self) -> MutexGuard<'_, Shared<T, N>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hands out the producer and consumer handles. There is one of each per
    /// queue, so every call after the first returns `None`.
    pub fn split(&self) -> Option<(Producer<'_, T, N>, Consumer<'_, T, N>)> {
        let mut shared = self.lock();
        if shared.handed_out {
            log::warn!("producer and consumer already handed out");
            return None;
        }
        shared.handed_out = true;
        Some((Producer { shared: self }, Consumer { shared: self }))
    }

    pub fn request_reset(&self) {
        self.lock().staged.control.set_reset(true);
    }

    /// Applies one tick with whatever both sides staged, then clears the stages.
    pub fn clock(&self) -> Outputs<T> {
        let mut shared = self.lock();
        let inputs = core::mem::replace(&mut shared.staged, Inputs::idle());
        let outputs = shared.queue.clock(inputs);
        if inputs.control.reset() {
            shared.read_result = None;
        }
        if let Some(value) = outputs.read() {
            if shared.read_result.replace(value).is_some() {
                log::warn!("consumer did not collect the previous read before the next tick");
            }
        }
        outputs
    }

    pub fn status(&self) -> QueueStatus {
        let shared = self.lock();
        let queue = &shared.queue;
        QueueStatus { full: queue.is_full(), empty: queue.is_empty(), depth: queue.depth() }
    }

    pub fn into_inner(self) -> RingQueue<T, N> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner).queue
    }
}

/// Write side of a [`SharedQueue`].
#[derive(Debug)]
pub struct Producer<'a, T: Word, const N: usize> {
    shared: &'a SharedQueue<T, N>,
}

impl<'a, T: Word, const N: usize> Producer<'a, T, N> {
    /// Drives the write port for the next tick. Staging again before the tick
    /// replaces the value.
    pub fn request_write(&self, value: T) {
        let mut shared = self.shared.lock();
        if shared.staged.control.write_enable() {
            log::warn!("write of {:?} replaces {:?} staged for the same tick", value, shared.staged.data);
        }
        shared.staged.control.set_write_enable(true);
        shared.staged.data = value;
    }

    // pre-tick status of the next tick
    pub fn is_full(&self) -> bool {
        self.shared.lock().queue.is_full()
    }
}

/// Read side of a [`SharedQueue`].
#[derive(Debug)]
pub struct Consumer<'a, T: Word, const N: usize> {
    shared: &'a SharedQueue<T, N>,
}

impl<'a, T: Word, const N: usize> Consumer<'a, T, N> {
    /// Drives the read port for the next tick.
    pub fn request_read(&self) {
        self.shared.lock().staged.control.set_read_enable(true);
    }

    /// Takes the value accepted by the last tick, if any. A reset tick discards it.
    pub fn take_read(&self) -> Option<T> {
        self.shared.lock().read_result.take()
    }

    // pre-tick status of the next tick
    pub fn is_empty(&self) -> bool {
        self.shared.lock().queue.is_empty()
    }
}
