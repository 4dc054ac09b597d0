//! Channel metadata returned by the channel lookup.

/// A content publisher's identity on the video platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Channel identifier (e.g. `UC...`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Subscriber count. Hidden counts resolve to 0.
    pub subscriber_count: u64,
    /// Identifier of the platform-managed uploads playlist.
    pub uploads_playlist_id: String,
    /// Medium-resolution channel avatar, when the platform provides one.
    pub thumbnail_url: Option<String>,
}
