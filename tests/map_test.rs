/*!
 * Map Tests
 * Concurrent put/get and atomic check-then-act behavior of SynchronizedMap
 */

use concurrent_collections::{Collection, SynchronizedMap};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Barrier};
use std::thread;
use std::time::Duration;

const THREADS: usize = 100;
const PER_THREAD: usize = 100;
const BIG: usize = THREADS * PER_THREAD * 4;

fn fill_concurrently<F>(map: &Arc<SynchronizedMap<usize, usize>>, op: F)
where
    F: Fn(&SynchronizedMap<usize, usize>, usize, usize) + Send + Sync + Copy + 'static,
{
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let map = map.clone();
            thread::spawn(move || {
                let base = t * PER_THREAD;
                for i in 0..PER_THREAD {
                    let k = base + i;
                    op(&*map, k, BIG + k);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_empty_map() {
    let map = SynchronizedMap::<u8, u8>::new(10);
    assert_eq!(map.size(), 0);
    assert_eq!(map.get(&1), None);
}

#[test]
fn test_concurrent_put_get() {
    let map = Arc::new(SynchronizedMap::new(BIG));

    fill_concurrently(&map, |m, k, v| {
        assert_eq!(m.put(k, v), None);
    });

    assert_eq!(map.size(), THREADS * PER_THREAD);

    let mut values: Vec<usize> = (0..THREADS * PER_THREAD)
        .map(|k| map.get(&k).unwrap())
        .collect();
    values.sort_unstable();
    for (i, v) in values.into_iter().enumerate() {
        assert_eq!(v, BIG + i, "values should be unique");
    }
}

#[test]
fn test_concurrent_put_if_absent_two_passes() {
    let map = Arc::new(SynchronizedMap::new(BIG));

    fill_concurrently(&map, |m, k, v| {
        assert!(m.put_if_absent(k, v), "first pass should add {}", k);
    });
    assert_eq!(map.size(), THREADS * PER_THREAD);

    fill_concurrently(&map, |m, k, v| {
        assert!(!m.put_if_absent(k, v + 1), "second pass should not add {}", k);
    });
    assert_eq!(map.size(), THREADS * PER_THREAD);
    assert_eq!(map.get(&0), Some(BIG));
}

#[test]
fn test_put_if_absent_exactly_one_winner() {
    const RACERS: usize = 16;

    for round in 0..20 {
        let map = Arc::new(SynchronizedMap::new(1));
        let barrier = Arc::new(Barrier::new(RACERS));

        let handles: Vec<_> = (0..RACERS)
            .map(|id| {
                let map = map.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    (id, map.put_if_absent("contested", id))
                })
            })
            .collect();

        let results: Vec<(usize, bool)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners: Vec<usize> = results.iter().filter(|(_, won)| *won).map(|(id, _)| *id).collect();

        assert_eq!(winners.len(), 1, "round {}", round);
        assert_eq!(map.get(&"contested"), Some(winners[0]));
    }
}

#[test]
fn test_compute_if_absent_runs_producer_once() {
    const RACERS: usize = 16;

    let map = Arc::new(SynchronizedMap::new(4));
    let calls = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(RACERS));

    let handles: Vec<_> = (0..RACERS)
        .map(|id| {
            let map = map.clone();
            let calls = calls.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                map.compute_if_absent("expensive", || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    // Widen the race window
                    thread::sleep(Duration::from_millis(5));
                    Some(format!("made-by-{}", id))
                })
            })
        })
        .collect();

    let results: Vec<(Option<String>, bool)> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(results.iter().filter(|(_, created)| *created).count(), 1);

    let stored = map.get(&"expensive");
    assert!(stored.is_some());
    for (value, _) in &results {
        assert_eq!(value, &stored);
    }
}

#[test]
fn test_compute_if_absent_empty_result() {
    let map = SynchronizedMap::<u32, Vec<u8>>::new(4);
    let (value, created) = map.compute_if_absent(1, || None);
    assert_eq!(value, None);
    assert!(!created);
    assert_eq!(map.size(), 0);

    // An empty-but-present value is still a value
    let (value, created) = map.compute_if_absent(1, || Some(Vec::new()));
    assert_eq!(value, Some(Vec::new()));
    assert!(created);
    assert_eq!(map.size(), 1);
}

#[test]
fn test_clear_through_collection_trait() {
    let map = SynchronizedMap::new(100);
    for i in 0..100 {
        map.put(i, true);
    }
    assert_eq!(map.size(), 100);

    let as_collection: &dyn Collection = &map;
    as_collection.clear();
    assert!(as_collection.is_empty());
}

#[test]
fn test_remove_and_keys() {
    let map = SynchronizedMap::new(8);
    map.put("a", 1);
    map.put("b", 2);
    map.put("c", 3);

    assert_eq!(map.remove(&"b"), Some(2));
    assert_eq!(map.remove(&"b"), None);

    let mut keys: Vec<_> = map.keys().into_iter().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn test_readers_inside_range_with_waiting_writer() {
    let map = Arc::new(SynchronizedMap::new(4));
    map.put("a", 1);

    let (done_tx, done_rx) = mpsc::channel();
    let traversal = {
        let map = map.clone();
        thread::spawn(move || {
            let mut writer = None;
            let mut observed = None;
            map.range(|_, _| {
                let putter = map.clone();
                writer = Some(thread::spawn(move || putter.put("b", 2)));
                // Let the writer park on the lock before reading again
                thread::sleep(Duration::from_millis(100));
                observed = Some((map.size(), map.get(&"a"), map.contains(&"b"), map.keys().len()));
                false
            });
            if let Some(writer) = writer {
                assert_eq!(writer.join().unwrap(), None);
            }
            done_tx.send(observed).unwrap();
        })
    };

    let observed = done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("reader inside range blocked behind a waiting writer");
    traversal.join().unwrap();

    assert_eq!(observed, Some((1, Some(1), false, 1)));
    assert_eq!(map.get(&"b"), Some(2));
}
