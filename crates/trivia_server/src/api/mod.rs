//! HTTP boundary for the trivia API.
//!
//! # Responsibility
//! - Map HTTP verbs and paths onto `TriviaService` use-cases.
//! - Own the shared connection and random source for request handling.
//!
//! # Invariants
//! - Store work runs on the blocking pool; locks are never held across an
//!   `.await`.
//! - Every response body carries `success`.

pub mod dto;
pub mod error;
pub mod handlers;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post, MethodRouter};
use axum::Router;
use error::ApiError;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use trivia_core::{SqliteTriviaRepository, TriviaService};

type SqliteService<'conn> = TriviaService<SqliteTriviaRepository<'conn>>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Wraps a migrated connection with an entropy-seeded random source.
    pub fn new(conn: Connection) -> Self {
        Self::with_rng(conn, StdRng::from_entropy())
    }

    /// Wraps a migrated connection with a caller-provided random source.
    pub fn with_rng(conn: Connection, rng: StdRng) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs one service call on the blocking pool under the connection lock.
    async fn with_service<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteService<'_>) -> Result<T, ApiError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        run_blocking(move || {
            let conn = lock(&conn, "connection_poisoned")?;
            let service = TriviaService::new(SqliteTriviaRepository::try_new(&conn)?);
            f(&service)
        })
        .await
    }

    /// Like `with_service`, also handing out the shared random source.
    async fn with_quiz_service<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteService<'_>, &mut StdRng) -> Result<T, ApiError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let rng = Arc::clone(&self.rng);
        run_blocking(move || {
            let mut rng = lock(&rng, "rng_poisoned")?;
            let conn = lock(&conn, "connection_poisoned")?;
            let service = TriviaService::new(SqliteTriviaRepository::try_new(&conn)?);
            f(&service, &mut *rng)
        })
        .await
    }
}

fn lock<'a, T>(mutex: &'a Mutex<T>, error_code: &str) -> Result<MutexGuard<'a, T>, ApiError> {
    mutex.lock().map_err(|_| {
        error!("event=lock module=api status=error error_code={error_code}");
        ApiError::Internal
    })
}

async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|err| {
        error!("event=blocking_task module=api status=error error_code=task_failed error={err}");
        ApiError::Internal
    })?
}

/// Builds the application router.
///
/// Unknown paths and known paths hit with an unsupported method both answer
/// with the error envelope.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/categories", with_envelope(get(handlers::list_categories)))
        .route(
            "/categories/:category_id/questions",
            with_envelope(get(handlers::questions_in_category)),
        )
        .route(
            "/questions",
            with_envelope(get(handlers::list_questions).post(handlers::create_question)),
        )
        .route(
            "/questions/search",
            with_envelope(post(handlers::search_questions)),
        )
        .route(
            "/questions/:question_id",
            with_envelope(delete(handlers::delete_question)),
        )
        .route("/quizzes", with_envelope(post(handlers::next_quiz_question)))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

fn with_envelope(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handlers::method_not_allowed)
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    info!(
        "event=http_request module=api method={method} path={path} status={} duration_ms={}",
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}
