//! Memory-model stress tests for the once-only cells.
//!
//! A slow constructor fills every field of a large payload; reader threads
//! poll the cell without ever taking the lock.  Any reader that observes the
//! value must observe all of it.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use lazyinit_core::{DoubleCheckedCell, LockedCell};
use proptest::prelude::*;

const WORDS: usize = 256;

struct Payload {
    words: Vec<u64>,
    checksum: u64,
}

impl Payload {
    fn build_slowly() -> Self {
        let mut words = Vec::with_capacity(WORDS);
        for i in 0..WORDS {
            if i % 32 == 0 {
                thread::sleep(Duration::from_micros(200));
            }
            words.push(i as u64 + 1);
        }
        let checksum = words.iter().sum();
        Self { words, checksum }
    }

    fn assert_complete(&self) {
        assert_eq!(self.words.len(), WORDS, "payload observed before it was filled");
        assert!(self.words.iter().all(|&w| w != 0), "zero word observed");
        assert_eq!(self.words.iter().sum::<u64>(), self.checksum);
    }
}

#[test]
fn readers_never_observe_partial_value() {
    const READERS: usize = 8;
    const ROUNDS: usize = 20;

    for _ in 0..ROUNDS {
        let cell: DoubleCheckedCell<Payload> = DoubleCheckedCell::new();
        let done = AtomicBool::new(false);
        let observed = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..READERS {
                s.spawn(|| {
                    while !done.load(Ordering::Acquire) {
                        if let Some(payload) = cell.get() {
                            payload.assert_complete();
                            observed.fetch_add(1, Ordering::Relaxed);
                            break;
                        }
                        std::hint::spin_loop();
                    }
                });
            }
            s.spawn(|| {
                cell.get_or_init(Payload::build_slowly).assert_complete();
                done.store(true, Ordering::Release);
            });
        });

        assert!(cell.is_initialized());
        cell.get().unwrap().assert_complete();
        assert!(observed.load(Ordering::Relaxed) <= READERS);
    }
}

#[test]
fn blocked_callers_wait_for_the_winner() {
    const THREADS: usize = 12;
    let cell: DoubleCheckedCell<Payload> = DoubleCheckedCell::new();
    let calls = AtomicUsize::new(0);
    let barrier = Barrier::new(THREADS);

    let addresses: Vec<usize> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let payload = cell.get_or_init(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Payload::build_slowly()
                    });
                    payload.assert_complete();
                    payload as *const Payload as usize
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(addresses.iter().all(|&a| a == addresses[0]));
}

#[test]
fn failing_winner_lets_a_waiter_construct() {
    const THREADS: usize = 8;
    let cell: DoubleCheckedCell<u64> = DoubleCheckedCell::new();
    let attempts = AtomicUsize::new(0);
    let barrier = Barrier::new(THREADS);

    let results: Vec<Result<u64, String>> = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    cell.get_or_try_init(|| {
                        if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                            thread::sleep(Duration::from_millis(2));
                            Err("first attempt fails".to_string())
                        } else {
                            Ok(99)
                        }
                    })
                    .copied()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
    assert_eq!(results.iter().filter(|r| r == &&Ok(99)).count(), THREADS - 1);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    assert_eq!(cell.get(), Some(&99));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn double_checked_constructs_once(threads in 2usize..24, reads in 1usize..50) {
        let cell: DoubleCheckedCell<u64> = DoubleCheckedCell::new();
        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(threads);

        let addresses: Vec<usize> = thread::scope(|s| {
            let workers: Vec<_> = (0..threads)
                .map(|i| {
                    let (cell, calls, barrier) = (&cell, &calls, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        let mut last = 0;
                        for _ in 0..reads {
                            let v = cell.get_or_init(|| {
                                calls.fetch_add(1, Ordering::SeqCst);
                                i as u64
                            });
                            last = v as *const u64 as usize;
                        }
                        last
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        prop_assert!(addresses.iter().all(|&a| a == addresses[0]));
    }

    #[test]
    fn locked_constructs_once(threads in 2usize..24, reads in 1usize..50) {
        let cell: LockedCell<u64> = LockedCell::new();
        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(threads);

        let handles: Vec<Arc<u64>> = thread::scope(|s| {
            let workers: Vec<_> = (0..threads)
                .map(|i| {
                    let (cell, calls, barrier) = (&cell, &calls, &barrier);
                    s.spawn(move || {
                        barrier.wait();
                        let mut last = None;
                        for _ in 0..reads {
                            last = Some(cell.get_or_init(|| {
                                calls.fetch_add(1, Ordering::SeqCst);
                                i as u64
                            }));
                        }
                        last.unwrap()
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
        prop_assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }
}
