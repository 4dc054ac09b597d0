//! Narrative summary stage.
//!
//! Renders the leading rows of the engagement table into a fixed consultant
//! prompt and hands it to the text generator. The model's reply is returned
//! verbatim; nothing about its shape is checked.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, VideoRecord, VideoRecordSet};
use crate::ports::TextGenerator;

/// Number of leading records shown to the model. Taken in existing order, not re-ranked.
pub const SUMMARY_SAMPLE_SIZE: usize = 5;

const SUMMARY_TEMPLATE_NAME: &str = "summary_prompt";
const SUMMARY_TEMPLATE: &str = "You are a viral content consultant.
Analyze these video stats:
{{ data_summary }}

1. Identify the highest performing video.
2. Suggest 3 follow-up video titles that would go viral based on this style.
3. Keep it short and exciting.
";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env
    })
}

/// Assemble the prompt for the first [`SUMMARY_SAMPLE_SIZE`] records.
pub fn build_summary_prompt(records: &VideoRecordSet) -> Result<String, AppError> {
    let data_summary = format_stats_table(records.head(SUMMARY_SAMPLE_SIZE));

    environment()
        .render_named_str(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE, context! { data_summary })
        .map_err(|err| AppError::PromptRender(err.to_string()))
}

/// Ask the generator for a narrative summary of the record set.
pub fn summarize(
    generator: &impl TextGenerator,
    records: &VideoRecordSet,
) -> Result<String, AppError> {
    let prompt = build_summary_prompt(records)?;
    tracing::debug!(prompt_chars = prompt.len(), "requesting narrative summary");

    let summary = generator.generate(&prompt)?;
    tracing::info!(summary_chars = summary.len(), "narrative summary received");
    Ok(summary)
}

/// Plain-text table of index, title, views and likes; columns right-aligned.
pub fn format_stats_table(records: &[VideoRecord]) -> String {
    const HEADERS: [&str; 3] = ["Title", "Views", "Likes"];

    let rows: Vec<[String; 3]> = records
        .iter()
        .map(|record| [record.title.clone(), record.views.to_string(), record.likes.to_string()])
        .collect();

    let index_width = records.len().saturating_sub(1).to_string().len();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let mut header = " ".repeat(index_width);
    for (title, width) in HEADERS.iter().zip(widths) {
        header.push_str(&format!("  {title:>width$}"));
    }
    lines.push(header);

    for (index, row) in rows.iter().enumerate() {
        let mut line = format!("{index:<index_width$}");
        for (cell, width) in row.iter().zip(widths) {
            line.push_str(&format!("  {cell:>width$}"));
        }
        lines.push(line);
    }

    lines.join("\n")
}
