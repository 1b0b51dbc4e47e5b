//! HTTP route handlers for the game API.
//!
//! The handlers are a thin adapter: they range-check the raw JSON fields,
//! translate them into [`tablero_core`] types, call the game engine under the
//! state lock, and serialize the outcome. All game rules live in
//! [`tablero_game`]; nothing here mutates the board directly.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tablero_core::{Digit, Position};
use tablero_game::MAX_ERASES;

use crate::state::AppState;

/// Builds the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/game", get(game_view))
        .route("/insert", post(insert))
        .route("/erase", post(erase))
        .route("/reset", post(reset))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Serialize)]
struct GameView {
    board: [[u8; 9]; 9],
    fixed: [[bool; 9]; 9],
    erases: u8,
    max_erases: u8,
    win: bool,
}

/// GET /api/game - current board, given mask, and erase budget.
async fn game_view(State(state): State<AppState>) -> Json<GameView> {
    let game = state.game().lock().await;
    Json(GameView {
        board: game.board().to_values(),
        fixed: *game.given_mask(),
        erases: game.erases_used(),
        max_erases: MAX_ERASES,
        win: game.is_won(),
    })
}

#[derive(Deserialize)]
struct InsertRequest {
    row: i64,
    col: i64,
    num: i64,
}

#[derive(Serialize)]
struct InsertResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    board: [[u8; 9]; 9],
    win: bool,
}

/// POST /api/insert - attempt to place a digit.
///
/// Out-of-range coordinates or digits answer 400 before the engine is
/// consulted; rule rejections answer 200 with `success: false` and the
/// rejection reason.
async fn insert(State(state): State<AppState>, Json(req): Json<InsertRequest>) -> Response {
    let (Some(pos), Some(digit)) = (parse_position(req.row, req.col), parse_digit(req.num)) else {
        return invalid_input("row, col, or num out of range");
    };

    let mut game = state.game().lock().await;
    let (success, error) = match game.insert(pos, digit) {
        Ok(()) => (true, None),
        Err(err) => {
            log::debug!("insert at {pos} rejected: {err}");
            (false, Some(err.to_string()))
        }
    };
    Json(InsertResponse {
        success,
        error,
        board: game.board().to_values(),
        win: game.is_won(),
    })
    .into_response()
}

#[derive(Deserialize)]
struct EraseRequest {
    row: i64,
    col: i64,
}

#[derive(Serialize)]
struct EraseResponse {
    success: bool,
    board: [[u8; 9]; 9],
    erases: u8,
}

/// POST /api/erase - clear a cell, spending one erase.
///
/// An exhausted budget answers 400; erasing an already-empty cell is a
/// no-op with `success: false` and an unchanged counter.
async fn erase(State(state): State<AppState>, Json(req): Json<EraseRequest>) -> Response {
    let Some(pos) = parse_position(req.row, req.col) else {
        return invalid_input("row or col out of range");
    };

    let mut game = state.game().lock().await;
    match game.erase(pos) {
        Ok(erased) => Json(EraseResponse {
            success: erased,
            board: game.board().to_values(),
            erases: game.erases_used(),
        })
        .into_response(),
        Err(err) => {
            log::debug!("erase at {pos} rejected: {err}");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    success: false,
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(Serialize)]
struct ResetResponse {
    success: bool,
    board: [[u8; 9]; 9],
    erases: u8,
    fixed: [[bool; 9]; 9],
}

/// POST /api/reset - replace the board with a fresh random puzzle.
///
/// The board swap and the erase-counter reset happen in one engine call
/// under the lock, so they can never be observed out of step.
async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let fresh = state.pool().pick(&mut rand::rng());
    let mut game = state.game().lock().await;
    game.reset(fresh);
    log::info!("game reset to a fresh puzzle");
    Json(ResetResponse {
        success: true,
        board: game.board().to_values(),
        erases: game.erases_used(),
        fixed: *game.given_mask(),
    })
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

fn invalid_input(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            success: false,
            error: message.to_owned(),
        }),
    )
        .into_response()
}

fn parse_position(row: i64, col: i64) -> Option<Position> {
    let row = u8::try_from(row).ok()?;
    let col = u8::try_from(col).ok()?;
    Position::try_new(row, col)
}

fn parse_digit(num: i64) -> Option<Digit> {
    Digit::try_from_value(u8::try_from(num).ok()?)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, header},
    };
    use http_body_util::BodyExt as _;
    use serde_json::{Value, json};
    use tablero_game::Game;
    use tablero_pool::PuzzlePool;
    use tower::ServiceExt as _;

    use super::*;

    const PUZZLE: &str = "\
5 3 0 0 7 0 0 0 0
6 0 0 1 9 5 0 0 0
0 9 8 0 0 0 0 6 0
8 0 0 0 6 0 0 0 3
4 0 0 8 0 3 0 0 1
7 0 0 0 2 0 0 0 6
0 6 0 0 0 0 2 8 0
0 0 0 4 1 9 0 0 5
0 0 0 0 8 0 0 7 9
";

    fn test_app() -> Router {
        let pool = PuzzlePool::builtin().unwrap();
        let game = Game::new(PUZZLE.parse().unwrap());
        Router::new()
            .nest("/api", api_router())
            .with_state(AppState::new(pool, game))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_game_view_shape() {
        let app = test_app();
        let response = app
            .oneshot(Request::builder().uri("/api/game").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["board"][0][0], 5);
        assert_eq!(body["fixed"][0][0], true);
        assert_eq!(body["fixed"][0][2], false);
        assert_eq!(body["erases"], 0);
        assert_eq!(body["max_erases"], 3);
        assert_eq!(body["win"], false);
    }

    #[tokio::test]
    async fn test_insert_accepts_legal_move() {
        let app = test_app();
        let response = app
            .oneshot(post_json("/api/insert", json!({"row": 0, "col": 2, "num": 4})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["board"][0][2], 4);
        assert_eq!(body["win"], false);
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_insert_reports_rule_rejection() {
        let app = test_app();
        // 3 is already in row 0.
        let response = app
            .oneshot(post_json("/api/insert", json!({"row": 0, "col": 2, "num": 3})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "number already present in this row");
        assert_eq!(body["board"][0][2], 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_out_of_range_input() {
        let app = test_app();
        for payload in [
            json!({"row": 9, "col": 0, "num": 1}),
            json!({"row": 0, "col": -1, "num": 1}),
            json!({"row": 0, "col": 0, "num": 0}),
            json!({"row": 0, "col": 0, "num": 10}),
        ] {
            let response = app
                .clone()
                .oneshot(post_json("/api/insert", payload))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = json_body(response).await;
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn test_erase_budget_flow() {
        let app = test_app();

        // Three filled cells, one erase each.
        for (i, (row, col)) in [(0, 0), (0, 1), (0, 4)].into_iter().enumerate() {
            let response = app
                .clone()
                .oneshot(post_json("/api/erase", json!({"row": row, "col": col})))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = json_body(response).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["erases"], i + 1);
            assert_eq!(body["board"][row][col], 0);
        }

        // Budget exhausted: the fourth erase is refused.
        let response = app
            .clone()
            .oneshot(post_json("/api/erase", json!({"row": 1, "col": 0})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "erase limit reached");

        // The refused cell is untouched.
        let response = app
            .oneshot(Request::builder().uri("/api/game").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["board"][1][0], 6);
        assert_eq!(body["erases"], 3);
    }

    #[tokio::test]
    async fn test_erase_of_empty_cell_spends_nothing() {
        let app = test_app();
        let response = app
            .oneshot(post_json("/api/erase", json!({"row": 0, "col": 2})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["erases"], 0);
    }

    #[tokio::test]
    async fn test_reset_returns_a_playable_board() {
        let app = test_app();

        // Spend an erase so the reset visibly restores the budget.
        let response = app
            .clone()
            .oneshot(post_json("/api/erase", json!({"row": 0, "col": 0})))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["erases"], 1);

        let response = app
            .oneshot(post_json("/api/reset", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["erases"], 0);

        let board = body["board"].as_array().unwrap();
        assert_eq!(board.len(), 9);
        for (r, row) in board.iter().enumerate() {
            let row = row.as_array().unwrap();
            assert_eq!(row.len(), 9);
            for (c, cell) in row.iter().enumerate() {
                let value = cell.as_u64().unwrap();
                assert!(value <= 9);
                // The given mask is exactly the non-empty cells.
                assert_eq!(body["fixed"][r][c], value != 0);
            }
        }
    }
}
