use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    thread::{self, ThreadId},
};

use rayon::prelude::*;
use scope_finally::{make_scope_guard, ScopeGuard};

#[test]
fn main() {
    tracing_subscriber::fmt::fmt().with_max_level(tracing::Level::TRACE).init();

    const GUARDS: usize = 64;
    let fired = AtomicUsize::new(0);
    // thread each action ran on, by guard index
    let fired_on: Vec<Mutex<Option<ThreadId>>> = (0..GUARDS).map(|_| Mutex::new(None)).collect();

    let guards: Vec<ScopeGuard<_>> = (0..GUARDS)
        .map(|i| {
            let fired = &fired;
            let slot = &fired_on[i];
            make_scope_guard(move || {
                fired.fetch_add(1, Ordering::SeqCst);
                let previous = slot.lock().unwrap().replace(thread::current().id());
                assert!(previous.is_none(), "guard {i} fired twice");
            })
        })
        .collect();
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    // each worker takes ownership of one guard and drops it there
    guards.into_par_iter().enumerate().for_each(|(i, guard)| {
        assert!(guard.is_armed());
        let worker = thread::current().id();
        drop(guard);
        assert_eq!(*fired_on[i].lock().unwrap(), Some(worker));
    });

    assert_eq!(fired.load(Ordering::SeqCst), GUARDS);
    assert!(fired_on.iter().all(|slot| slot.lock().unwrap().is_some()));
}
