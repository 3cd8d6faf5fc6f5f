//! Cycle-by-cycle driver for a [`RingQueue`] and the trace it records.

use std::fmt;

use crate::{Inputs, Outputs, RingQueue, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample<T> {
    pub cycle: u64,
    pub inputs: Inputs<T>,
    pub outputs: Outputs<T>,
    /// Depth once the cycle's operations were applied.
    pub depth: usize,
}

impl<T: Word> fmt::Display for Sample<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let control = self.inputs.control;
        let status = self.outputs.status;
        write!(
            f,
            "#{:<4} rst={} wr_en={} rd_en={} din={:?} | full={} empty={} valid={} dout={:?} | depth={}",
            self.cycle,
            u8::from(control.reset()),
            u8::from(control.write_enable()),
            u8::from(control.read_enable()),
            self.inputs.data,
            u8::from(status.full()),
            u8::from(status.empty()),
            u8::from(status.read_valid()),
            self.outputs.data,
            self.depth,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace<T> {
    samples: Vec<Sample<T>>,
}

impl<T: Word> Trace<T> {
    pub fn samples(&self) -> &[Sample<T>] {
        &self.samples
    }

    /// Values of every accepted read, in the order they left the queue.
    pub fn reads(&self) -> Vec<T> {
        self.samples.iter().filter_map(|sample| sample.outputs.read()).collect()
    }
}

impl<T: Word> fmt::Display for Trace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sample in &self.samples {
            writeln!(f, "{sample}")?;
        }
        Ok(())
    }
}

/// Drives a queue with a stimulus, one set of inputs per clock cycle.
#[derive(Debug)]
pub struct Testbench<T: Word, const N: usize> {
    queue: RingQueue<T, N>,
    cycle: u64,
    trace: Trace<T>,
}

impl<T: Word, const N: usize> Testbench<T, N> {
    pub fn new(queue: RingQueue<T, N>) -> Self {
        Self { queue, cycle: 0, trace: Trace::default() }
    }

    pub fn queue(&self) -> &RingQueue<T, N> {
        &self.queue
    }

    pub fn trace(&self) -> &Trace<T> {
        &self.trace
    }

    pub fn step(&mut self, inputs: Inputs<T>) -> Outputs<T> {
        let outputs = self.queue.clock(inputs);
        self.trace.samples.push(Sample { cycle: self.cycle, inputs, outputs, depth: self.queue.depth() });
        self.cycle += 1;
        outputs
    }

    /// Clocks every cycle of `stimulus` in order.
    pub fn run<I>(&mut self, stimulus: I) -> &Trace<T>
    where
        I: IntoIterator<Item = Inputs<T>>,
    {
        for inputs in stimulus {
            self.step(inputs);
        }
        log::debug!("ran {} cycle(s), depth {}", self.cycle, self.queue.depth());
        &self.trace
    }

    pub fn into_parts(self) -> (RingQueue<T, N>, Trace<T>) {
        (self.queue, self.trace)
    }
}

/// Two reset cycles, then `writes` cycles writing 0, 1, 2, ... and finally
/// `reads` read cycles.
pub fn reference_stimulus(writes: u8, reads: usize) -> Vec<Inputs<u8>> {
    let mut stimulus = vec![Inputs::reset(); 2];
    stimulus.extend((0..writes).map(Inputs::write));
    stimulus.extend(core::iter::repeat(Inputs::read()).take(reads));
    stimulus
}
