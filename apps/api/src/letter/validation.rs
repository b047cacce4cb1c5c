use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{AppError, INVALID_EMAIL_MESSAGE, MISSING_FIELDS_MESSAGE};
use crate::letter::models::{ApplicantInput, LetterForm};
use crate::letter::sanitize::sanitize;

/// Same rule the browser form applies before submitting.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Checks required fields and email shape, trims everything, and drops blank optionals.
///
/// Required fields are checked before the email so a half-filled form always
/// gets the "complete all fields" message.
pub fn validate_form(form: LetterForm) -> Result<ApplicantInput, AppError> {
    let LetterForm {
        full_name,
        email,
        phone_number,
        position,
        company_name,
        motivation,
        skills,
        address,
        education,
        major,
        internship_company,
        project_experience,
    } = form;

    let (Some(full_name), Some(email), Some(phone_number), Some(position), Some(company_name)) = (
        required(full_name),
        required(email),
        required(phone_number),
        required(position),
        required(company_name),
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    if !is_valid_email(&email) {
        return Err(AppError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }

    Ok(ApplicantInput {
        full_name,
        email,
        phone_number,
        position,
        company_name,
        motivation: non_blank(motivation),
        skills: non_blank(skills),
        address: non_blank(address),
        education: non_blank(education),
        major: non_blank(major),
        internship_company: non_blank(internship_company),
        project_experience: non_blank(project_experience),
    })
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Like `non_blank`, but also `None` when nothing readable survives sanitizing,
/// so a required value made only of markup cannot render as an empty string.
fn required(value: Option<String>) -> Option<String> {
    non_blank(value).filter(|v| !sanitize(v).trim().is_empty())
}

/// Trimmed value, or `None` when absent or whitespace only.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
