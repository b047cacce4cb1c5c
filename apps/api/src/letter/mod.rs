// Application letter generation.
// Flow: LetterForm → validate_form → ApplicantInput → sanitize → clauses + sections → HTML.

pub mod clauses;
pub mod date;
pub mod handlers;
pub mod models;
pub mod sanitize;
pub mod template;
pub mod validation;
