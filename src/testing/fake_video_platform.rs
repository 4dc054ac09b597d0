use crate::domain::{AppError, Channel, VideoRecord};
use crate::ports::VideoPlatform;
use std::sync::{Arc, Mutex};

/// Upstream call observed by [`FakeVideoPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Channel(String),
    PlaylistItems { playlist_id: String, max_results: usize },
    Videos(Vec<String>),
}

#[derive(Clone, Default)]
pub struct FakeVideoPlatform {
    pub channel: Option<Channel>,
    pub playlist_ids: Vec<String>,
    pub videos: Vec<VideoRecord>,
    pub calls: Arc<Mutex<Vec<PlatformCall>>>,
}

impl FakeVideoPlatform {
    pub fn with_channel(channel: Channel) -> Self {
        Self { channel: Some(channel), ..Self::default() }
    }

    pub fn playlist(mut self, ids: &[&str]) -> Self {
        self.playlist_ids = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn videos(mut self, videos: Vec<VideoRecord>) -> Self {
        self.videos = videos;
        self
    }

    pub fn get_calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl VideoPlatform for FakeVideoPlatform {
    fn channel(&self, channel_id: &str) -> Result<Option<Channel>, AppError> {
        self.calls.lock().unwrap().push(PlatformCall::Channel(channel_id.to_string()));
        Ok(self.channel.clone())
    }

    fn playlist_video_ids(
        &self,
        playlist_id: &str,
        max_results: usize,
    ) -> Result<Vec<String>, AppError> {
        self.calls.lock().unwrap().push(PlatformCall::PlaylistItems {
            playlist_id: playlist_id.to_string(),
            max_results,
        });
        Ok(self.playlist_ids.clone())
    }

    fn videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, AppError> {
        self.calls.lock().unwrap().push(PlatformCall::Videos(video_ids.to_vec()));
        Ok(self.videos.clone())
    }
}

pub fn channel(id: &str) -> Channel {
    Channel {
        id: id.to_string(),
        title: format!("Channel {id}"),
        subscriber_count: 1_000,
        uploads_playlist_id: format!("UU{id}"),
        thumbnail_url: None,
    }
}

pub fn video(title: &str, views: u64, likes: u64) -> VideoRecord {
    VideoRecord {
        title: title.to_string(),
        views,
        likes,
        comments: 0,
        thumbnail_url: format!("https://i.ytimg.com/vi/{title}/hqdefault.jpg"),
    }
}
