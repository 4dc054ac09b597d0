//! Playlist enumeration stage.

use crate::domain::{AppError, PAGE_SIZE};
use crate::ports::VideoPlatform;

/// Identifiers of the most recent uploads in a playlist, first page only.
///
/// Never returns more than [`PAGE_SIZE`] identifiers, whatever upstream sends.
pub fn recent_video_ids(
    platform: &impl VideoPlatform,
    playlist_id: &str,
) -> Result<Vec<String>, AppError> {
    let mut ids = platform.playlist_video_ids(playlist_id, PAGE_SIZE)?;
    if ids.len() > PAGE_SIZE {
        tracing::debug!(returned = ids.len(), "playlist page larger than requested, truncating");
        ids.truncate(PAGE_SIZE);
    }
    tracing::info!(playlist_id, count = ids.len(), "playlist enumerated");
    Ok(ids)
}
