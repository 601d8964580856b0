pub mod calendar;

use std::sync::Arc;

use axum::{routing::get, Router};
use fop_core::CalendarSource;
use tower_http::trace::TraceLayer;

/// Build the router serving the calendar of `source`.
pub fn router(source: CalendarSource) -> Router {
    Router::new()
        .route("/calendar", get(calendar::handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(source))
}
