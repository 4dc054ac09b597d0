//! Pipeline stages, each a thin step over the platform and generator ports.

pub mod channel_lookup;
pub mod narrative_summarizer;
pub mod playlist_enumerator;
pub mod video_details;

pub use channel_lookup::lookup_channel;
pub use narrative_summarizer::{
    SUMMARY_SAMPLE_SIZE, build_summary_prompt, format_stats_table, summarize,
};
pub use playlist_enumerator::recent_video_ids;
pub use video_details::fetch_video_records;
