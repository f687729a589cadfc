use std::sync::{Arc, Barrier};
use std::thread;

use common::*;
use entable::prelude::*;

mod common;

const THREADS: usize = 16;

#[test]
fn concurrent_first_resolution_runs_once() {
    let registry = EntityRegistry::new(MapperConfig::default());
    let barrier = Barrier::new(THREADS);

    let tables: Vec<Arc<TableDescriptor>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.resolve::<User>().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &tables[0];
    assert!(tables.iter().all(|table| Arc::ptr_eq(first, table)));

    let stats = registry.stats();
    assert_eq!(stats.resolutions, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, THREADS - 1);
    assert_eq!(stats.size, 1);
}

#[test]
fn different_types_resolve_independently() {
    let registry = EntityRegistry::new(MapperConfig::default());
    let barrier = Barrier::new(4);

    thread::scope(|scope| {
        scope.spawn(|| {
            barrier.wait();
            registry.resolve::<User>().unwrap();
        });
        scope.spawn(|| {
            barrier.wait();
            registry.resolve::<Membership>().unwrap();
        });
        scope.spawn(|| {
            barrier.wait();
            registry.resolve::<Article>().unwrap();
        });
        scope.spawn(|| {
            barrier.wait();
            assert!(registry.resolve::<TableGenerated>().is_err());
        });
    });

    let stats = registry.stats();
    assert_eq!(stats.resolutions, 3);
    assert_eq!(stats.size, 3);
    assert!(registry.is_resolved::<User>());
    assert!(registry.is_resolved::<Membership>());
    assert!(registry.is_resolved::<Article>());
    assert!(!registry.is_resolved::<TableGenerated>());
}

#[test]
fn concurrent_fragment_reads_agree() {
    let registry = EntityRegistry::new(MapperConfig::default());
    let table = registry.resolve::<UserInfo>().unwrap();
    let barrier = Barrier::new(THREADS);

    let selects: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    table.select_columns().to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(selects.iter().all(|s| s == "ID,USER_NAME AS userName,`DESC`"));
}
