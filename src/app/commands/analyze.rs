//! Analyze command: channel lookup, playlist, video details, narrative.

use crate::app::AppContext;
use crate::domain::{AnalysisOutcome, AnalysisReport, AppError, Narrative};
use crate::ports::{TextGenerator, VideoPlatform};
use crate::services::{
    build_summary_prompt, fetch_video_records, lookup_channel, recent_video_ids, summarize,
};

/// Sample channel analyzed when none is given.
pub const DEFAULT_CHANNEL_ID: &str = "UCeVMnSShP_Iviwkknt83cww";

/// Options for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub channel_id: String,
    /// Stop after assembling the prompt instead of calling the model.
    pub prompt_preview: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self { channel_id: DEFAULT_CHANNEL_ID.to_string(), prompt_preview: false }
    }
}

/// Execute the analyze command.
///
/// Stages run strictly in sequence; any failure aborts the run. A missing
/// channel is an outcome, not an error, and stops before the playlist stage.
pub fn execute<P, G>(
    ctx: &AppContext<P, G>,
    options: &AnalyzeOptions,
) -> Result<AnalysisOutcome, AppError>
where
    P: VideoPlatform,
    G: TextGenerator,
{
    let channel_id = options.channel_id.trim();
    if channel_id.is_empty() {
        return Err(AppError::InvalidInput("channel ID must not be empty".to_string()));
    }

    let Some(channel) = lookup_channel(ctx.platform(), channel_id)? else {
        return Ok(AnalysisOutcome::ChannelNotFound { channel_id: channel_id.to_string() });
    };

    let video_ids = recent_video_ids(ctx.platform(), &channel.uploads_playlist_id)?;
    let videos = fetch_video_records(ctx.platform(), &video_ids)?;

    let narrative = if options.prompt_preview {
        Narrative::PromptPreview(build_summary_prompt(&videos)?)
    } else {
        Narrative::Summary(summarize(ctx.generator(), &videos)?)
    };

    Ok(AnalysisOutcome::Completed(AnalysisReport { channel, videos, narrative }))
}
