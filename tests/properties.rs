use std::collections::VecDeque;

use proptest::prelude::*;
use sync_fifo::{Inputs, RingQueue};

#[derive(Debug, Clone, Copy)]
enum Op {
    Tick { write: Option<u16>, read: bool },
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (proptest::option::of(any::<u16>()), any::<bool>()).prop_map(|(write, read)| Op::Tick { write, read }),
        1 => Just(Op::Reset),
    ]
}

/// Runs `ops` on a queue and on a `VecDeque` with an explicit depth, checking
/// they agree after every tick.
fn check_against_model<const N: usize>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut queue = RingQueue::<u16, N>::new().unwrap();
    let mut model: VecDeque<u16> = VecDeque::new();

    for op in ops {
        match *op {
            Op::Reset => {
                queue.clock(Inputs::reset());
                model.clear();
            }
            Op::Tick { write, read } => {
                let was_full = model.len() == N;
                let was_empty = model.is_empty();
                prop_assert_eq!(queue.is_full(), was_full);
                prop_assert_eq!(queue.is_empty(), was_empty);

                let port = queue.tick(write.is_some(), write.unwrap_or_default(), read);

                let expected = if read && !was_empty { model.pop_front() } else { None };
                if let Some(value) = write {
                    if !was_full {
                        model.push_back(value);
                    }
                }
                prop_assert_eq!(port.value(), expected);
            }
        }

        let (wr, rd) = (queue.write_cursor(), queue.read_cursor());
        prop_assert!(wr.get() < 2 * N && rd.get() < 2 * N);
        prop_assert!(queue.depth() <= N);
        prop_assert_eq!(queue.depth(), model.len());
        prop_assert_eq!(queue.depth(), (wr.get() + 2 * N - rd.get()) % (2 * N));
        prop_assert_eq!(queue.peek(), model.front().copied());
    }
    Ok(())
}

proptest! {
    #[test]
    fn matches_model_power_of_two(ops in prop::collection::vec(op(), 1..300)) {
        check_against_model::<8>(&ops)?;
    }

    #[test]
    fn matches_model_odd_capacity(ops in prop::collection::vec(op(), 1..300)) {
        check_against_model::<5>(&ops)?;
    }

    #[test]
    fn matches_model_single_slot(ops in prop::collection::vec(op(), 1..100)) {
        check_against_model::<1>(&ops)?;
    }

    #[test]
    fn fifo_order(values in prop::collection::vec(any::<u16>(), 0..=16)) {
        let mut queue = RingQueue::<u16, 16>::new().unwrap();
        for &value in &values {
            queue.tick(true, value, false);
        }
        let read: Vec<u16> = (0..values.len()).filter_map(|_| queue.tick(false, 0, true).value()).collect();
        prop_assert_eq!(read, values);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn dropped_write_never_comes_back(fill in prop::collection::vec(1..u16::MAX, 4)) {
        let mut queue = RingQueue::<u16, 4>::new().unwrap();
        for &value in &fill {
            queue.tick(true, value, false);
        }
        prop_assert!(queue.is_full());
        queue.tick(true, 0, false);
        prop_assert_eq!(queue.depth(), 4);

        let read: Vec<u16> = (0..5).filter_map(|_| queue.tick(false, 0, true).value()).collect();
        prop_assert_eq!(read, fill);
    }

    #[test]
    fn reset_twice_is_reset_once(values in prop::collection::vec(any::<u16>(), 0..8)) {
        let mut once = RingQueue::<u16, 8>::new().unwrap();
        let mut twice = RingQueue::<u16, 8>::new().unwrap();
        for &value in &values {
            once.tick(true, value, false);
            twice.tick(true, value, false);
        }
        once.reset();
        twice.reset();
        twice.reset();
        prop_assert_eq!(once.depth(), 0);
        prop_assert_eq!(twice.depth(), 0);
        prop_assert_eq!(once.write_cursor(), twice.write_cursor());
        prop_assert_eq!(once.read_cursor(), twice.read_cursor());
    }
}
