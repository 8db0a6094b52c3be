//! Negamax search with fail-hard alpha-beta pruning.
//!
//! The search recurses over one shared mutable board with strict make/undo
//! nesting; every recursive call restores the board exactly before
//! returning. The chosen move travels back up through explicit return
//! values. Only one search may mutate a given board at a time;
//! [`find_best_move_threaded`] hands an independent clone to a worker.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use rand::seq::SliceRandom;

use crate::board::eval::CHECKMATE_SCORE;
use crate::board::{Board, Move};
use crate::cache::{decode_move, encode_move, MoveStore};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Result of a root search. `best_move` is `None` only when the searched
/// position was already terminal.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    /// Score from the perspective of the side to move at the root.
    pub score: i32,
}

/// Search for the best move at `depth` plies.
///
/// When a cache is supplied it is consulted first; a stored move that is
/// still legal here short-circuits the search, and the move chosen by a
/// full search is recorded back.
pub fn find_best_move(board: &mut Board, depth: u32, cache: Option<&MoveStore>) -> SearchOutcome {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return SearchOutcome {
            best_move: None,
            score: board.side_to_move().sign() * board.evaluate(),
        };
    }

    let fingerprint = board.fingerprint();
    if let Some(store) = cache {
        if let Some(hit) = cached_move(store, &fingerprint, &moves) {
            log::info!("cache hit for {fingerprint}: {hit}");
            return SearchOutcome {
                best_move: Some(hit),
                score: board.side_to_move().sign() * board.evaluate(),
            };
        }
    }

    let sign = board.side_to_move().sign();
    let (score, best_move) = alpha_beta(
        board,
        &moves,
        depth,
        -CHECKMATE_SCORE,
        CHECKMATE_SCORE,
        sign,
    );
    // The generations inside alpha_beta left the check flag describing a
    // leaf position; put the root's back.
    board.in_check = board.scan_pins_and_checks().0;

    if let (Some(store), Some(mv)) = (cache, best_move) {
        if let Err(err) = store.record(&fingerprint, &encode_move(&mv)) {
            log::warn!("failed to record move for {fingerprint}: {err}");
        }
    }

    SearchOutcome { best_move, score }
}

/// Run [`find_best_move`] on a clone of `board` in a worker thread, so an
/// interactive caller is never blocked and never shares a mutating board.
#[must_use]
pub fn find_best_move_threaded(
    board: &Board,
    depth: u32,
    cache: Option<Arc<MoveStore>>,
) -> JoinHandle<SearchOutcome> {
    let mut board = board.clone();
    thread::spawn(move || find_best_move(&mut board, depth, cache.as_deref()))
}

/// Pick a uniformly random legal move. `None` on an empty set.
#[must_use]
pub fn random_move(moves: &[Move]) -> Option<Move> {
    moves.choose(&mut rand::thread_rng()).copied()
}

/// Fail-hard negamax. `sign` is +1 when White is to move, -1 for Black;
/// scores returned are from the mover's perspective. `moves` must be the
/// legal set for the current position, generated after the last
/// `make_move` so the terminal flags are fresh.
fn alpha_beta(
    board: &mut Board,
    moves: &[Move],
    depth: u32,
    mut alpha: i32,
    beta: i32,
    sign: i32,
) -> (i32, Option<Move>) {
    if depth == 0 || board.is_checkmate() || board.is_stalemate() {
        return (sign * board.evaluate(), None);
    }

    let mut best_score = -CHECKMATE_SCORE;
    let mut best_move = None;
    for &mv in moves {
        board.make_move(mv);
        let replies = board.legal_moves();
        let (reply_score, _) = alpha_beta(board, &replies, depth - 1, -beta, -alpha, -sign);
        let score = -reply_score;
        board.undo_move();

        if score > best_score || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    (best_score, best_move)
}

/// Most recently recorded cached move for this fingerprint, validated
/// against the current legal set. A stale or undecodable entry is ignored
/// with a warning.
fn cached_move(store: &MoveStore, fingerprint: &str, legal: &[Move]) -> Option<Move> {
    let entries = store.lookup(fingerprint)?;
    let encoded = entries.last()?.clone();
    let Some((from, to)) = decode_move(&encoded) else {
        log::warn!("undecodable cached move {encoded:?} for {fingerprint}");
        return None;
    };
    let found = legal.iter().copied().find(|m| m.from == from && m.to == to);
    if found.is_none() {
        log::warn!("cached move {encoded} is not legal for {fingerprint}");
    }
    found
}
