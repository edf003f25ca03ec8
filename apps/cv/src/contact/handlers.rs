use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::contact::validation::ContactForm;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/contact
/// Body: `{ "email", "category", "subject", "message" }`. Returns `{"success": true}`.
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, AppError> {
    state.contact.submit(form).await?;
    Ok(Json(json!({ "success": true })))
}
