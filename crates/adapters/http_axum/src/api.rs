//! `GET /api`: the status document the page probe reads.

use axum::Json;
use axum::extract::State;

use folio_domain::status::StatusPayload;

use crate::state::AppState;

/// Return `{"message": <configured message>}`.
pub async fn status(State(state): State<AppState>) -> Json<StatusPayload> {
    Json(StatusPayload::new(&*state.api_message))
}
