//! Shared application state for the game server.

use std::sync::Arc;

use tablero_game::Game;
use tablero_pool::PuzzlePool;
use tokio::sync::Mutex;

/// Shared state accessible from all request handlers.
///
/// There is one game process-wide, shared by all callers. Every
/// read-modify-respond cycle locks [`AppState::game`] for the duration of the
/// whole operation, so inserts, erases, and resets never interleave on the
/// board. No handler awaits while holding the lock for longer than its own
/// operation; a plain mutex is all the serialization the engine needs.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    pool: PuzzlePool,
    game: Mutex<Game>,
}

impl AppState {
    /// Creates the state from a loaded pool and the initial game.
    pub fn new(pool: PuzzlePool, game: Game) -> Self {
        Self {
            inner: Arc::new(Inner {
                pool,
                game: Mutex::new(game),
            }),
        }
    }

    /// The fixed puzzle pool, used by reset.
    pub fn pool(&self) -> &PuzzlePool {
        &self.inner.pool
    }

    /// The single live game, behind its lock.
    pub fn game(&self) -> &Mutex<Game> {
        &self.inner.game
    }
}
