//! Tablero game server - serves a single shared Sudoku game over HTTP.
//!
//! The binary wires the puzzle pool and game engine to a small axum API and
//! optionally serves the static front end. All game logic lives in the
//! library crates; this is the adapter layer.

mod routes;
mod state;

use std::{net::SocketAddr, path::PathBuf};

use axum::Router;
use clap::Parser;
use tablero_game::Game;
use tablero_pool::PuzzlePool;
use tower_http::services::ServeDir;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "tablero")]
#[command(about = "Web-served single-player Sudoku with rule-checked moves")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Load board1.txt..board10.txt from this directory instead of the
    /// embedded pool
    #[arg(long)]
    boards_dir: Option<PathBuf>,

    /// Directory with the static front end (API-only mode when absent)
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    // A broken pool is fatal here; once loaded, selection cannot fail.
    let pool = match &args.boards_dir {
        Some(dir) => {
            log::info!("loading puzzle pool from {}", dir.display());
            PuzzlePool::from_dir(dir)?
        }
        None => PuzzlePool::builtin()?,
    };

    let game = Game::new(pool.pick(&mut rand::rng()));
    let state = AppState::new(pool, game);

    let mut app = Router::new()
        .nest("/api", routes::api_router())
        .with_state(state);

    if args.static_dir.exists() {
        log::info!("serving static files from {}", args.static_dir.display());
        app = app
            .fallback_service(ServeDir::new(&args.static_dir).append_index_html_on_directories(true));
    } else {
        log::info!("static directory not found, API-only mode");
    }

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    log::info!("listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
