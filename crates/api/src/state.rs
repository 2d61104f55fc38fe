use std::sync::Arc;

use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gymcoach_db::DbPool,
    /// Compiled HTML templates.
    pub views: Arc<Views>,
}
