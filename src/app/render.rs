//! Text dashboard for a completed analysis.

use crate::domain::{AnalysisReport, Narrative, VideoRecord, VideoRecordSet};

const BAR_WIDTH: usize = 40;
const MAX_LABEL_CHARS: usize = 32;
const RULE: &str = "────────────────────────────────────────────────────────────";

/// Render the channel header, both engagement charts and the narrative.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Channel: {}\n", report.channel.title));
    out.push_str(&format!("Subscribers: {}\n", report.channel.subscriber_count));
    if let Some(url) = &report.channel.thumbnail_url {
        out.push_str(&format!("Avatar: {}\n", url));
    }

    out.push_str(&format!("\n{RULE}\n"));
    out.push_str("📈 View Count Analysis\n");
    out.push_str(&render_chart(&report.videos, |record| record.views));
    out.push_str("\n👍 Likes Analysis\n");
    out.push_str(&render_chart(&report.videos, |record| record.likes));

    out.push_str(&format!("\n{RULE}\n"));
    match &report.narrative {
        Narrative::Summary(text) => {
            out.push_str("🤖 AI Consultant Report\n\n");
            out.push_str(text.trim_end());
        }
        Narrative::PromptPreview(prompt) => {
            out.push_str("📝 Prompt Preview (model not called)\n\n");
            out.push_str(prompt.trim_end());
        }
    }
    out.push('\n');
    out
}

/// Horizontal bar chart of one counter, one row per video in record order.
pub fn render_chart(videos: &VideoRecordSet, value: impl Fn(&VideoRecord) -> u64) -> String {
    if videos.is_empty() {
        return "  (no recent uploads)\n".to_string();
    }

    let rows: Vec<(String, u64)> =
        videos.iter().map(|record| (truncate_label(&record.title), value(record))).collect();
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let max_value = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in &rows {
        let bar = "█".repeat(bar_len(*count, max_value));
        out.push_str(&format!("  {label:<label_width$}  {bar} {count}\n"));
    }
    out
}

/// Bar length scaled to the largest value. Non-zero values always get at least one cell.
fn bar_len(value: u64, max_value: u64) -> usize {
    if max_value == 0 || value == 0 {
        return 0;
    }
    let scaled = (u128::from(value) * BAR_WIDTH as u128) / u128::from(max_value);
    (scaled as usize).max(1)
}

fn truncate_label(title: &str) -> String {
    if title.chars().count() <= MAX_LABEL_CHARS {
        return title.to_string();
    }
    let mut label: String = title.chars().take(MAX_LABEL_CHARS - 1).collect();
    label.push('…');
    label
}
