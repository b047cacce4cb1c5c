//! Letter template engine.
//!
//! The document is an ordered list of section producers. Each producer reads
//! the already-sanitized `LetterContext` and returns its HTML fragment, or
//! `None` when the section does not apply. `render_letter` joins the fragments
//! inside a single A4-sized wrapper. All styling is inline so the fragment
//! renders and rasterizes without external stylesheets.

use chrono::NaiveDate;

use crate::letter::clauses::qualification_sentence;
use crate::letter::date::{format_indonesian_date, Clock};
use crate::letter::models::ApplicantInput;
use crate::letter::sanitize::{sanitize, sanitize_present};

const PAGE_STYLE: &str = "max-width: 210mm; margin: 0; padding: 20mm; font-family: Arial, sans-serif; line-height: 1.6; color: #333; background: white; min-height: 297mm;";
const TOP_RULE_STYLE: &str = "border-top: 3px solid #4CAF50; margin-bottom: 20px;";
const LINE_STYLE: &str = "margin: 0 0 5px 0; font-size: 14px;";
const PARAGRAPH_STYLE: &str =
    "margin-bottom: 16px; line-height: 1.6; text-align: justify; font-size: 14px;";

/// Recipient city printed under the company name.
const RECIPIENT_CITY: &str = "Jakarta, Indonesia";

// ────────────────────────────────────────────────────────────────────────────
// Context
// ────────────────────────────────────────────────────────────────────────────

/// Every user-supplied value, sanitized once, plus the derived pieces.
#[derive(Debug, Clone)]
pub struct LetterContext {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
    pub company_name: String,
    pub address: Option<String>,
    pub motivation: Option<String>,
    pub skills: Vec<String>,
    pub qualifications: String,
    pub date: String,
}

impl LetterContext {
    pub fn new(input: &ApplicantInput, date: NaiveDate) -> Self {
        LetterContext {
            full_name: sanitize(&input.full_name),
            email: sanitize(&input.email),
            phone_number: sanitize(&input.phone_number),
            position: sanitize(&input.position),
            company_name: sanitize(&input.company_name),
            address: sanitize_present(input.address.as_deref()),
            motivation: sanitize_present(input.motivation.as_deref()),
            skills: input.skills.as_deref().map(split_skills).unwrap_or_default(),
            qualifications: qualification_sentence(input),
            date: format_indonesian_date(date),
        }
    }
}

/// Splits on commas, trims and sanitizes each token, and drops empty ones.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|token| sanitize_present(Some(token.trim())))
        .map(|skill| skill.trim().to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

type SectionProducer = fn(&LetterContext) -> Option<String>;

/// Document order. Optional parts return `None` and are skipped.
pub const SECTIONS: &[SectionProducer] = &[
    sender_section,
    date_section,
    recipient_section,
    salutation_section,
    body_section,
    contribution_section,
    discussion_section,
    signature_section,
];

fn sender_section(ctx: &LetterContext) -> Option<String> {
    let address = ctx
        .address
        .as_ref()
        .map(|address| format!(r#"<p style="{LINE_STYLE} color: #333;">{address}</p>"#))
        .unwrap_or_default();

    Some(format!(
        r#"<div data-section="sender" style="margin-bottom: 30px;">
<p style="margin: 0 0 5px 0; font-weight: bold; font-size: 14px;">{name}</p>
{address}
<p style="{LINE_STYLE}">{phone}</p>
<p style="margin: 0 0 20px 0; font-size: 14px;">{email}</p>
</div>"#,
        name = ctx.full_name,
        phone = ctx.phone_number,
        email = ctx.email,
    ))
}

fn date_section(ctx: &LetterContext) -> Option<String> {
    Some(format!(
        r#"<div data-section="date" style="margin-bottom: 40px;">
<p style="margin: 0; font-size: 14px;">{}</p>
</div>"#,
        ctx.date
    ))
}

fn recipient_section(ctx: &LetterContext) -> Option<String> {
    Some(format!(
        r#"<div data-section="recipient" style="margin-bottom: 30px;">
<p style="{LINE_STYLE}">Tim Rekrutmen</p>
<p style="{LINE_STYLE}">{company}</p>
<p style="margin: 0; font-size: 14px;">{RECIPIENT_CITY}</p>
</div>"#,
        company = ctx.company_name,
    ))
}

fn salutation_section(ctx: &LetterContext) -> Option<String> {
    Some(format!(
        r#"<div data-section="salutation" style="margin-bottom: 20px;">
<p style="margin: 0; font-size: 14px;">Yth. Tim Rekrutmen {},</p>
</div>"#,
        ctx.company_name
    ))
}

fn body_section(ctx: &LetterContext) -> Option<String> {
    let mut paragraphs = vec![
        paragraph("Dengan hormat,"),
        paragraph(&format!(
            "Nama saya {}. Melalui surat ini, saya ingin menyampaikan minat saya untuk melamar posisi {} di perusahaan Bapak/Ibu.",
            ctx.full_name, ctx.position
        )),
        paragraph(&ctx.qualifications),
    ];
    paragraphs.extend(motivation_paragraph(ctx));
    paragraphs.extend(skills_block(ctx));

    Some(format!(
        "<div data-section=\"body\" style=\"margin-bottom: 20px;\">\n{}\n</div>",
        paragraphs.join("\n")
    ))
}

fn motivation_paragraph(ctx: &LetterContext) -> Option<String> {
    ctx.motivation.as_ref().map(|motivation| {
        format!(r#"<p data-section="motivation" style="{PARAGRAPH_STYLE}">{motivation}</p>"#)
    })
}

fn skills_block(ctx: &LetterContext) -> Option<String> {
    if ctx.skills.is_empty() {
        return None;
    }

    let items: String = ctx
        .skills
        .iter()
        .map(|skill| format!(r#"<li style="margin-bottom: 4px;">{skill}</li>"#))
        .collect();

    Some(format!(
        r#"<div data-section="skills">
<p style="margin-bottom: 8px; line-height: 1.6; text-align: justify; font-size: 14px;">Berikut adalah kualifikasi dan keahlian yang saya miliki:</p>
<ul style="margin-left: 20px; margin-bottom: 16px; font-size: 14px;">{items}</ul>
</div>"#
    ))
}

fn contribution_section(ctx: &LetterContext) -> Option<String> {
    Some(format!(
        "<div data-section=\"contribution\" style=\"margin-bottom: 20px;\">\n{}\n</div>",
        paragraph(&format!(
            "Saya percaya bahwa latar belakang dan keterampilan yang saya miliki dapat menjadi kontribusi yang positif bagi tim di {}. Bersama surat ini, saya lampirkan CV untuk bahan pertimbangan lebih lanjut.",
            ctx.company_name
        ))
    ))
}

fn discussion_section(_ctx: &LetterContext) -> Option<String> {
    Some(format!(
        "<div data-section=\"discussion\" style=\"margin-bottom: 40px;\">\n{}\n</div>",
        paragraph("Saya sangat menghargai kesempatan untuk dapat berdiskusi lebih jauh mengenai potensi kontribusi saya di perusahaan Bapak/Ibu.")
    ))
}

fn signature_section(ctx: &LetterContext) -> Option<String> {
    Some(format!(
        r#"<div data-section="signature" style="margin-top: 40px;">
<p style="margin: 0 0 60px 0; font-size: 14px;">Hormat saya,</p>
<p style="margin: 0; font-weight: bold; font-size: 14px;">{}</p>
</div>"#,
        ctx.full_name
    ))
}

fn paragraph(text: &str) -> String {
    format!(r#"<p style="{PARAGRAPH_STYLE}">{text}</p>"#)
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Renders the complete letter for `date`. Pure: same input and date, same HTML.
pub fn render_letter(input: &ApplicantInput, date: NaiveDate) -> String {
    let ctx = LetterContext::new(input, date);

    let sections: Vec<String> = SECTIONS.iter().filter_map(|section| section(&ctx)).collect();

    format!(
        "<div style=\"{PAGE_STYLE}\">\n<div style=\"{TOP_RULE_STYLE}\"></div>\n{}\n</div>\n",
        sections.join("\n")
    )
}

/// Renders the letter dated with `clock`'s current day.
pub fn generate_letter(input: &ApplicantInput, clock: &dyn Clock) -> String {
    render_letter(input, clock.today())
}
