//! Tier 5: independent instances sharing one store.

use std::thread;

use rand::Rng;

use crate::test_utils::*;

#[test]
fn instances_see_each_others_writes() {
    let h = seeded();
    let other = h.another_instance();
    other.charge_add(9, 10, 1.0).unwrap();
    assert_eq!(cost_between(&h.graph, 10, 9), Some(1.0));
    h.graph.charge_remove(9, 10).unwrap();
    assert_eq!(cost_between(&other, 9, 10), None);
}

#[test]
fn concurrent_writers_leave_symmetric_graph() {
    let h = with_points(8);
    let handles: Vec<_> = (0..4u32)
        .map(|t| {
            let graph = h.another_instance();
            thread::spawn(move || {
                let mut rng = rand::thread_rng();
                for _ in 0..50 {
                    let a = rng.gen_range(1..=8u64);
                    let b = rng.gen_range(1..=8u64);
                    if a != b {
                        graph.charge_add(a, b, f64::from(t)).unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // every written pair is present on both sides
    for id in 1..=8u64 {
        for neighbor in h.graph.charge_adjacent(id).unwrap().adjacencies.keys() {
            assert!(
                cost_between(&h.graph, *neighbor, id).is_some(),
                "{} -> {} has no reverse entry",
                id,
                neighbor
            );
        }
    }
}

#[test]
fn concurrent_path_queries_agree() {
    let h = seeded();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = h.another_instance();
            thread::spawn(move || {
                (0..20)
                    .map(|_| graph.charge_min_path(6, 9).unwrap().total_cost)
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().iter().all(|c| *c == Some(41.0)));
    }
}
