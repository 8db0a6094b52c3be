//! End-to-end tests of the search against the durable move store.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use woodpusher::cache::encode_move;
use woodpusher::{find_best_move, find_best_move_threaded, Board, MoveStore, Square};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "woodpusher-it-{}-{name}.json",
        std::process::id()
    ))
}

#[test]
fn cache_hit_short_circuits_the_search() {
    let path = scratch_path("hit");
    let _ = fs::remove_file(&path);

    let store = MoveStore::open(&path);
    let mut board = Board::new();
    store.record(&board.fingerprint(), "wp:e2->e4").unwrap();

    let outcome = find_best_move(&mut board, 3, Some(&store));
    let best = outcome.best_move.unwrap();
    assert_eq!((best.from, best.to), (Square(1, 4), Square(3, 4)));

    let _ = fs::remove_file(&path);
}

#[test]
fn stale_cache_entry_falls_through_to_a_real_search() {
    let path = scratch_path("stale");
    let _ = fs::remove_file(&path);

    let store = MoveStore::open(&path);
    let mut board = Board::new();
    let fingerprint = board.fingerprint();
    // The d1 queen cannot reach h5 through its own pawns.
    store.record(&fingerprint, "wQ:d1->h5").unwrap();

    let outcome = find_best_move(&mut board, 2, Some(&store));
    let best = outcome.best_move.unwrap();
    assert!(board.legal_moves().contains(&best));

    // The search appended its own choice after the stale entry.
    let entries = store.lookup(&fingerprint).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1], encode_move(&best));

    let _ = fs::remove_file(&path);
}

#[test]
fn searched_moves_survive_a_reopen() {
    let path = scratch_path("reopen");
    let _ = fs::remove_file(&path);

    let fingerprint;
    let recorded;
    {
        let store = MoveStore::open(&path);
        let mut board = Board::new();
        fingerprint = board.fingerprint();
        let outcome = find_best_move(&mut board, 2, Some(&store));
        recorded = encode_move(&outcome.best_move.unwrap());
    }

    let reopened = MoveStore::open(&path);
    assert_eq!(reopened.lookup(&fingerprint), Some(vec![recorded]));

    let _ = fs::remove_file(&path);
}

#[test]
fn worker_thread_shares_the_store() {
    let path = scratch_path("worker");
    let _ = fs::remove_file(&path);

    let store = Arc::new(MoveStore::open(&path));
    let board = Board::new();
    let handle = find_best_move_threaded(&board, 2, Some(Arc::clone(&store)));
    let outcome = handle.join().unwrap();

    assert!(outcome.best_move.is_some());
    assert!(store.lookup(&Board::new().fingerprint()).is_some());

    let _ = fs::remove_file(&path);
}
