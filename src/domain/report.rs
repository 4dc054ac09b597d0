//! Result of a single analysis run, handed from the pipeline to the renderer.

use crate::domain::{Channel, VideoRecordSet};

/// What the model was asked for and what it returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrative {
    /// Free-form text returned by the generative model, unmodified.
    Summary(String),
    /// The assembled prompt; the model was not called.
    PromptPreview(String),
}

/// Everything the dashboard shows for a found channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub channel: Channel,
    pub videos: VideoRecordSet,
    pub narrative: Narrative,
}

/// Outcome of one user-triggered analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Lookup returned no channel; later stages did not run.
    ChannelNotFound { channel_id: String },
    Completed(AnalysisReport),
}
