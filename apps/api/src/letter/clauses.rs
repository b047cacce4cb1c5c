//! Qualification sentence, built from an ordered table of clauses.
//!
//! Each field clause splices the sanitized applicant value after a fixed
//! prefix, or emits its fallback phrase when the applicant left it blank.
//! Fixed clauses are emitted unconditionally.

use crate::letter::models::ApplicantInput;
use crate::letter::sanitize::sanitize_present;

const QUALIFICATION_LEAD: &str = "Saya merupakan lulusan";

/// One piece of the qualification sentence.
#[derive(Clone, Copy)]
pub enum Clause {
    Fixed(&'static str),
    Field {
        value: fn(&ApplicantInput) -> Option<&str>,
        prefix: &'static str,
        fallback: &'static str,
    },
}

impl Clause {
    pub fn render(&self, input: &ApplicantInput) -> String {
        match *self {
            Clause::Fixed(text) => text.to_string(),
            Clause::Field {
                value,
                prefix,
                fallback,
            } => match sanitize_present(value(input)) {
                Some(clean) => format!("{prefix}{clean}"),
                None => fallback.to_string(),
            },
        }
    }
}

fn education(input: &ApplicantInput) -> Option<&str> {
    input.education.as_deref()
}

fn major(input: &ApplicantInput) -> Option<&str> {
    input.major.as_deref()
}

fn internship_company(input: &ApplicantInput) -> Option<&str> {
    input.internship_company.as_deref()
}

fn project_experience(input: &ApplicantInput) -> Option<&str> {
    input.project_experience.as_deref()
}

/// Composition order: education → major → study period → internship → project → closing.
pub const QUALIFICATION_CLAUSES: &[Clause] = &[
    Clause::Field {
        value: education,
        prefix: " ",
        fallback: " SMK Wikrama Bogor",
    },
    Clause::Field {
        value: major,
        prefix: " dengan jurusan ",
        fallback: " dengan jurusan Pengembangan Perangkat Lunak dan Gim",
    },
    Clause::Fixed(". Selama masa studi"),
    Clause::Field {
        value: internship_company,
        prefix: " dan praktik kerja lapangan di ",
        fallback: " dan praktik kerja lapangan",
    },
    Clause::Field {
        value: project_experience,
        prefix: ", saya telah ",
        fallback: ", saya telah mengembangkan beberapa proyek berbasis web menggunakan React.js dan Next.js, serta terbiasa menggunakan GitLab sebagai alat kolaborasi dalam tim pengembangan",
    },
    Clause::Fixed(
        ". Saya juga memiliki semangat belajar yang tinggi dan mampu beradaptasi dengan cepat terhadap teknologi baru.",
    ),
];

/// Builds the full qualification sentence from `QUALIFICATION_CLAUSES`.
pub fn qualification_sentence(input: &ApplicantInput) -> String {
    QUALIFICATION_CLAUSES
        .iter()
        .fold(QUALIFICATION_LEAD.to_string(), |mut sentence, clause| {
            sentence.push_str(&clause.render(input));
            sentence
        })
}
