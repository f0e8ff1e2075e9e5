//! Store behaviour under realistic use: the full lifecycle a client drives
//! through the HTTP routes, and concurrent callers hammering one store.
//!
//! # Design
//! The concurrency tests share one `Arc<TodoStore>` across OS threads and
//! across tokio worker tasks, then check that the ids handed out form a
//! contiguous run with no duplicates.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use todo_core::{Todo, TodoId, TodoStore};

#[test]
fn crud_lifecycle() {
    let store = TodoStore::new();

    // Step 1: empty store.
    assert!(store.list().is_empty(), "expected empty list");

    // Step 2: create.
    let created = store.create("Buy milk", false);
    assert_eq!(created, Todo::new(1, "Buy milk", false));

    // Step 3: get returns what was written.
    assert_eq!(store.get(1), Some(Todo::new(1, "Buy milk", false)));

    // Step 4: update completes it.
    let updated = store.update(1, "Buy milk", true).unwrap();
    assert_eq!(updated, Todo::new(1, "Buy milk", true));
    assert_eq!(store.get(1), Some(updated));

    // Step 5: list has one item.
    assert_eq!(store.list().len(), 1);

    // Step 6: delete, then it is gone.
    assert!(store.delete(1));
    assert_eq!(store.get(1), None);

    // Step 7: delete again reports nothing removed.
    assert!(!store.delete(1));

    // Step 8: the next create does not reuse id 1.
    assert_eq!(store.create("Walk dog", false).id, 2);
}

#[test]
fn list_size_tracks_creates_minus_deletes() {
    let store = TodoStore::new();
    let ids: Vec<TodoId> = (0..10).map(|i| store.create(format!("todo {i}"), false).id).collect();

    let mut deleted = 0;
    for id in ids.iter().filter(|id| *id % 3 == 0) {
        assert!(store.delete(*id));
        deleted += 1;
    }
    // Unknown and repeated deletes do not count.
    assert!(!store.delete(3));
    assert!(!store.delete(1_000));

    assert_eq!(store.list().len(), ids.len() - deleted);
}

#[test]
fn concurrent_creates_on_threads_yield_contiguous_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 25;

    let store = Arc::new(TodoStore::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|i| store.create(format!("thread {t} item {i}"), false).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<TodoId> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();

    let total = (THREADS * PER_THREAD) as TodoId;
    assert_eq!(ids, (1..=total).collect::<Vec<_>>());
    assert_eq!(store.len(), THREADS * PER_THREAD);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_on_runtime_tasks_yield_distinct_ids() {
    const TASKS: u64 = 128;

    let store = Arc::new(TodoStore::new());
    let mut handles = Vec::new();
    for i in 0..TASKS {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.create(format!("task {i}"), i % 2 == 0)
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        let todo = handle.await.unwrap();
        assert!(seen.insert(todo.id), "duplicate id {}", todo.id);
        assert_eq!(store.get(todo.id), Some(todo));
    }

    assert_eq!(seen, (1..=TASKS).collect::<HashSet<_>>());
}

#[test]
fn concurrent_mixed_operations_leave_a_consistent_store() {
    const THREADS: usize = 6;
    const PER_THREAD: usize = 50;

    let store = Arc::new(TodoStore::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut kept = Vec::new();
                for i in 0..PER_THREAD {
                    let todo = store.create(format!("{t}-{i}"), false);
                    let updated = store.update(todo.id, format!("{t}-{i} done"), true).unwrap();
                    assert_eq!(updated.id, todo.id);
                    if i % 2 == 0 {
                        assert!(store.delete(todo.id));
                    } else {
                        kept.push(updated);
                    }
                }
                kept
            })
        })
        .collect();

    let mut kept: Vec<Todo> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    kept.sort_by_key(|todo| todo.id);

    let mut listed = store.list();
    listed.sort_by_key(|todo| todo.id);
    assert_eq!(listed, kept);

    // Every id was consumed exactly once, so the counter sits past them all.
    let next = store.create("after", false);
    assert_eq!(next.id, (THREADS * PER_THREAD) as TodoId + 1);
}
