//! # API crate — shared fullstack server functions for lovenote
//!
//! Everything the web frontend calls lives here, along with the logical core
//! it is built on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`verify`] | — | Credential verification: normalized code → [`Identity`] or rejection |
//! | [`daily`] | — | Daily note resolution: exact date → latest quote → default constant |
//! | [`store`] | — | [`store::GreetingStore`] trait, in-memory test store, Postgres store (`server`) |
//! | [`models`] | — | `users`/`quotes` rows and the client-safe [`Identity`] projection |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//!
//! ## Server functions exposed here
//!
//! Each public `async fn` below is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with the full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin
//! client stub that forwards the call over HTTP.
//!
//! - [`verify_code`] — the gate submit
//! - [`daily_note`] — today's love note, never an error the client must handle
//! - [`record_answer`] — logs the final answer; writes nothing

use dioxus::prelude::*;

pub mod daily;
pub mod db;
pub mod models;
pub mod store;
pub mod verify;

pub use daily::DEFAULT_NOTE;
pub use models::Identity;
pub use verify::VerifyError;

/// Verify the submitted gate code.
///
/// Rejections carry no detail beyond the [`VerifyError`] message: a wrong
/// code and an unreachable store are indistinguishable to the caller.
#[cfg(feature = "server")]
#[post("/api/verify")]
pub async fn verify_code(code: String) -> Result<Identity, ServerFnError> {
    use crate::store::PgStore;

    verify::verify(&PgStore, &code)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/verify")]
pub async fn verify_code(code: String) -> Result<Identity, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Resolve today's love note. The resolver itself cannot fail; the `Result`
/// only covers the transport.
#[cfg(feature = "server")]
#[get("/api/daily-note")]
pub async fn daily_note() -> Result<String, ServerFnError> {
    use crate::store::PgStore;

    Ok(daily::resolve_today(&PgStore).await)
}

#[cfg(not(feature = "server"))]
#[get("/api/daily-note")]
pub async fn daily_note() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record the answer to the final question. Log-only; the store stays
/// read-only.
#[cfg(feature = "server")]
#[post("/api/answer")]
pub async fn record_answer(answer: String) -> Result<(), ServerFnError> {
    tracing::info!("valentine answered: {answer}");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/answer")]
pub async fn record_answer(answer: String) -> Result<(), ServerFnError> {
    Ok(())
}
