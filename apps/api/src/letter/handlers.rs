//! Axum route handlers for the Letter API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::errors::{AppError, MISSING_FIELDS_MESSAGE};
use crate::letter::models::{GenerateLetterResponse, LetterForm};
use crate::letter::template::generate_letter;
use crate::letter::validation::validate_form;
use crate::state::AppState;

/// POST /api/generate-letter
///
/// Validates the applicant form and returns the rendered letter HTML together
/// with the validated input. A body over the size limit gets 413; any other
/// unreadable body is treated like a form with missing fields.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    payload: Result<Json<LetterForm>, JsonRejection>,
) -> Result<Json<GenerateLetterResponse>, AppError> {
    let Json(form) = payload.map_err(|rejection| {
        debug!("Unreadable letter request body: {rejection}");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
        }
    })?;

    let input = validate_form(form)?;

    let letter_html = generate_letter(&input, state.clock.as_ref());
    info!(
        position = %input.position,
        company = %input.company_name,
        "Generated application letter"
    );

    Ok(Json(GenerateLetterResponse {
        success: true,
        letter_html,
        data: input,
    }))
}
