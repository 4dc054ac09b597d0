//! Video detail stage: batch lookup reshaped into the engagement table.

use crate::domain::{AppError, PAGE_SIZE, VideoRecordSet};
use crate::ports::VideoPlatform;

/// Fetch details for up to [`PAGE_SIZE`] videos in one batched request.
///
/// An empty id list returns an empty set without contacting the platform,
/// since a batch lookup with no ids is ill-defined upstream.
pub fn fetch_video_records(
    platform: &impl VideoPlatform,
    video_ids: &[String],
) -> Result<VideoRecordSet, AppError> {
    if video_ids.is_empty() {
        tracing::info!("no uploads to inspect, skipping video lookup");
        return Ok(VideoRecordSet::empty());
    }
    if video_ids.len() > PAGE_SIZE {
        return Err(AppError::InvalidInput(format!(
            "at most {} video ids per batch, got {}",
            PAGE_SIZE,
            video_ids.len()
        )));
    }

    let records = platform.videos(video_ids)?;
    tracing::info!(requested = video_ids.len(), returned = records.len(), "video details fetched");
    VideoRecordSet::new(records)
}
