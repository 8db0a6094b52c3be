//! Durable best-move cache.
//!
//! A JSON file mapping position fingerprints to the list of moves chosen
//! for them in past searches. Entries are only ever appended; the search
//! consults the newest entry and records its own choice after searching.
//! A missing or malformed file degrades to an empty cache, never an error.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::board::{Move, Square};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoreEntry {
    best_moves: Vec<String>,
}

/// Fingerprint → move-list store backed by a JSON file.
///
/// Internally synchronized, so one handle (or an `Arc`) can be shared
/// between an interactive caller and a search worker.
#[derive(Debug)]
pub struct MoveStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, StoreEntry>>,
}

impl MoveStore {
    /// Open the store at `path`, loading any existing entries.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(err) => {
                    log::warn!("ignoring malformed move store {}: {err}", path.display());
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                log::warn!("could not read move store {}: {err}", path.display());
                HashMap::new()
            }
        };
        MoveStore {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Previously recorded moves for a fingerprint, oldest first.
    #[must_use]
    pub fn lookup(&self, fingerprint: &str) -> Option<Vec<String>> {
        self.entries
            .lock()
            .get(fingerprint)
            .map(|e| e.best_moves.clone())
    }

    /// Append a move under a fingerprint and persist the whole store.
    pub fn record(&self, fingerprint: &str, encoded: &str) -> io::Result<()> {
        let json = {
            let mut entries = self.entries.lock();
            entries
                .entry(fingerprint.to_string())
                .or_default()
                .best_moves
                .push(encoded.to_string());
            serde_json::to_string_pretty(&*entries).map_err(io::Error::from)?
        };
        fs::write(&self.path, json)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Encode a move as `"<color><piece>:<from>-><to>"`, e.g. `wp:e2->e4` or
/// `bN:g8->f6`.
#[must_use]
pub fn encode_move(mv: &Move) -> String {
    format!(
        "{}{}:{}->{}",
        mv.color.to_char(),
        mv.piece.to_letter(),
        mv.from,
        mv.to
    )
}

/// Decode the origin and destination of an encoded move. The piece code
/// before the colon is carried for readability and not validated here;
/// the caller matches the squares against the current legal set.
#[must_use]
pub fn decode_move(encoded: &str) -> Option<(Square, Square)> {
    let (_code, squares) = encoded.split_once(':')?;
    let (from, to) = squares.split_once("->")?;
    Some((from.parse().ok()?, to.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("woodpusher-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn encode_decode_round_trip() {
        let mut board = Board::new();
        for mv in board.legal_moves() {
            let encoded = encode_move(&mv);
            assert_eq!(decode_move(&encoded), Some((mv.from, mv.to)));
        }
    }

    #[test]
    fn encoding_shape() {
        let mut board = Board::new();
        let mv = board
            .legal_moves()
            .into_iter()
            .find(|m| m.from == Square(1, 4) && m.to == Square(3, 4))
            .unwrap();
        assert_eq!(encode_move(&mv), "wp:e2->e4");
    }

    #[test]
    fn missing_store_is_empty() {
        let store = MoveStore::open(scratch_path("missing"));
        assert_eq!(store.lookup("anything"), None);
    }

    #[test]
    fn malformed_store_is_empty() {
        let path = scratch_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let store = MoveStore::open(&path);
        assert_eq!(store.lookup("anything"), None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn record_appends_and_persists() {
        let path = scratch_path("persists");
        let _ = fs::remove_file(&path);

        let store = MoveStore::open(&path);
        store.record("fp", "wp:e2->e4").unwrap();
        store.record("fp", "wp:d2->d4").unwrap();
        assert_eq!(
            store.lookup("fp"),
            Some(vec!["wp:e2->e4".to_string(), "wp:d2->d4".to_string()])
        );

        let reopened = MoveStore::open(&path);
        assert_eq!(
            reopened.lookup("fp"),
            Some(vec!["wp:e2->e4".to_string(), "wp:d2->d4".to_string()])
        );
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode_move("wp:e2e4"), None);
        assert_eq!(decode_move("e2->e4"), None);
        assert_eq!(decode_move("wp:z9->e4"), None);
    }
}
