//! Renderer — fills the HTML templates with resume data and, for downloads,
//! hands the print template to an `HtmlToPdf` converter.
//!
//! Every user-supplied value is HTML-escaped before substitution.

use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::render::pdf::HtmlToPdf;

pub mod pdf;

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const PREVIEW_TEMPLATE: &str = include_str!("../../templates/preview.html");
const RESUME_PDF_TEMPLATE: &str = include_str!("../../templates/resume_pdf.html");

/// Landing page with the resume form.
pub fn render_home() -> &'static str {
    HOME_TEMPLATE
}

/// Browser preview of the submitted resume.
pub fn render_preview(data: &ResumeData) -> String {
    fill_template(PREVIEW_TEMPLATE, data)
}

/// Print-oriented HTML used as PDF input.
pub fn render_resume_html(data: &ResumeData) -> String {
    fill_template(RESUME_PDF_TEMPLATE, data)
}

/// Renders the print template and converts it on the blocking pool.
/// Any conversion failure is fatal to the request; no partial PDF is returned.
pub async fn render_download(
    data: &ResumeData,
    converter: Arc<dyn HtmlToPdf>,
) -> Result<Bytes, AppError> {
    let html = render_resume_html(data);

    let pdf = tokio::task::spawn_blocking(move || converter.convert(&html))
        .await
        .context("PDF conversion task failed")??;

    Ok(Bytes::from(pdf))
}

/// Single-pass `{{key}}` substitution. Substituted values are never rescanned,
/// so user text that looks like a placeholder stays literal.
fn fill_template(template: &str, data: &ResumeData) -> String {
    let mut out = String::with_capacity(template.len() + 512);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        match lookup(data, after[..end].trim()) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn lookup(data: &ResumeData, key: &str) -> Option<String> {
    let value = match key {
        "name" => escape_html(&data.name),
        "email" => escape_html(&data.email),
        "phone" => escape_html(&data.phone),
        "summary" => escape_html(&data.summary),
        "experience" => escape_html(&data.experience),
        "education" => escape_html(&data.education),
        "skills" => skills_list(&data.skills),
        _ => return None,
    };
    Some(value)
}

/// One `<li>` per skill, in order. Empty entries produce empty items.
fn skills_list(skills: &[String]) -> String {
    skills
        .iter()
        .map(|s| format!("      <li>{}</li>", escape_html(s)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
