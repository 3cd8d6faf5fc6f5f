/*
Reference testbench: a 16-deep FIFO takes ten writes, then nine reads.
*/

use std::env;

use libc_print::std_name::println;
use sync_fifo::{reference_stimulus, ConfigError, RingQueue, Testbench};

const DEPTH: usize = 16;
const WRITES: u8 = 10;
const READS: usize = 9;

// Data bus width, overridable through FIFO_WIDTH
fn bus_width() -> u32 {
    match env::var("FIFO_WIDTH").map(|width| width.parse::<u32>()) {
        Ok(Ok(width)) => width,
        Ok(Err(e)) => {
            log::warn!("ignoring FIFO_WIDTH: {e}");
            8
        }
        Err(_) => 8,
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let queue: RingQueue<u8, DEPTH> = RingQueue::with_width(bus_width())?;
    log::info!("fifo: {:?}", queue.config());

    let mut bench = Testbench::new(queue);
    let trace = bench.run(reference_stimulus(WRITES, READS));
    println!("{}", trace);
    println!("read back: {:?}", trace.reads());

    let queue = bench.queue();
    log::info!("final depth {} (empty={}, full={})", queue.depth(), queue.is_empty(), queue.is_full());
    Ok(())
}
