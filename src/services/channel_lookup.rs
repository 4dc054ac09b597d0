//! Channel lookup stage.

use crate::domain::{AppError, Channel};
use crate::ports::VideoPlatform;

/// Fetch channel metadata. `Ok(None)` means the platform returned no matching channel.
pub fn lookup_channel(
    platform: &impl VideoPlatform,
    channel_id: &str,
) -> Result<Option<Channel>, AppError> {
    let channel = platform.channel(channel_id)?;
    match &channel {
        Some(found) => tracing::info!(
            channel_id,
            title = %found.title,
            uploads = %found.uploads_playlist_id,
            "channel found"
        ),
        None => tracing::info!(channel_id, "channel not found"),
    }
    Ok(channel)
}
