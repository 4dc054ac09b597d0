//! Video platform port definition.

use crate::domain::{AppError, Channel, VideoRecord};

/// Port for read-only video platform lookups.
///
/// Each call maps to exactly one upstream request.
pub trait VideoPlatform {
    /// Look up a channel by identifier. `Ok(None)` when the platform knows no such channel.
    fn channel(&self, channel_id: &str) -> Result<Option<Channel>, AppError>;

    /// First page of video identifiers in a playlist, at most `max_results` long.
    fn playlist_video_ids(
        &self,
        playlist_id: &str,
        max_results: usize,
    ) -> Result<Vec<String>, AppError>;

    /// Batch lookup of video details, in the order the platform returns them.
    fn videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, AppError>;
}
