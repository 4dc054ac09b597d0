//! YouTube Data API v3 client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, Channel, VideoRecord, YouTubeApiConfig};
use crate::ports::VideoPlatform;

const DEFAULT_STATUS_MESSAGE: &str = "YouTube API request failed";

/// HTTP transport for the YouTube Data API.
///
/// One request per call, no retries.
#[derive(Clone)]
pub struct HttpYouTubeClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpYouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpYouTubeClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpYouTubeClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &YouTubeApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::YouTubeApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    fn endpoint(&self, resource: &str) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!(
                    "youtube.api_url cannot be a base: {}",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .push(resource);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = self.endpoint(resource)?;
        tracing::debug!(%url, ?query, "youtube request");

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| AppError::YouTubeApi {
                message: format!(
                    "HTTP request failed: {}",
                    strip_key(&e.to_string(), &self.api_key)
                ),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| {
                AppError::malformed(format!("{} response", resource), e.to_string())
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 403 {
                "Forbidden (check the API key and quota)".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::YouTubeApi { message, status: Some(status.as_u16()) })
    }
}

impl VideoPlatform for HttpYouTubeClient {
    fn channel(&self, channel_id: &str) -> Result<Option<Channel>, AppError> {
        let response: ListResponse<ChannelItem> = self.get_json(
            "channels",
            &[("part", "snippet,contentDetails,statistics"), ("id", channel_id)],
        )?;

        response.items.into_iter().next().map(ChannelItem::into_channel).transpose()
    }

    fn playlist_video_ids(
        &self,
        playlist_id: &str,
        max_results: usize,
    ) -> Result<Vec<String>, AppError> {
        let max_results = max_results.to_string();
        let response: ListResponse<PlaylistItem> = self.get_json(
            "playlistItems",
            &[
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", max_results.as_str()),
            ],
        )?;

        Ok(response.items.into_iter().map(|item| item.content_details.video_id).collect())
    }

    fn videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, AppError> {
        let ids = video_ids.join(",");
        let response: ListResponse<VideoItem> =
            self.get_json("videos", &[("part", "snippet,statistics"), ("id", ids.as_str())])?;

        response
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_record(index))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    id: String,
    snippet: ChannelSnippet,
    content_details: ChannelContentDetails,
    #[serde(default)]
    statistics: Option<ChannelStatistics>,
}

impl ChannelItem {
    fn into_channel(self) -> Result<Channel, AppError> {
        let subscriber_count = match self.statistics.and_then(|s| s.subscriber_count) {
            Some(count) => count.value("subscriberCount", &self.id)?,
            None => 0,
        };
        let thumbnail_url = self
            .snippet
            .thumbnails
            .and_then(|t| t.medium.or(t.high).or(t.fallback))
            .map(|t| t.url);

        Ok(Channel {
            id: self.id,
            title: self.snippet.title,
            subscriber_count,
            uploads_playlist_id: self.content_details.related_playlists.uploads,
            thumbnail_url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: String,
    #[serde(default)]
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    #[serde(default)]
    subscriber_count: Option<Counter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemContentDetails {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    snippet: Option<VideoSnippet>,
    #[serde(default)]
    statistics: Option<VideoStatistics>,
}

impl VideoItem {
    fn into_record(self, index: usize) -> Result<VideoRecord, AppError> {
        let label = self.id.unwrap_or_else(|| format!("#{}", index));
        let snippet = self.snippet.ok_or_else(|| {
            AppError::malformed("videos response", format!("video {label} has no snippet"))
        })?;

        // A missing statistics block means every counter is disabled.
        let statistics = self.statistics.unwrap_or_default();
        let views = Counter::value_or_zero(statistics.view_count.as_ref(), "viewCount", &label)?;
        let likes = Counter::value_or_zero(statistics.like_count.as_ref(), "likeCount", &label)?;
        let comments =
            Counter::value_or_zero(statistics.comment_count.as_ref(), "commentCount", &label)?;

        let thumbnail_url = snippet
            .thumbnails
            .and_then(|t| t.high.or(t.medium).or(t.fallback))
            .map(|t| t.url)
            .ok_or_else(|| {
                AppError::malformed("videos response", format!("video {label} has no thumbnail"))
            })?;

        Ok(VideoRecord { title: snippet.title, views, likes, comments, thumbnail_url })
    }
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    #[serde(default)]
    view_count: Option<Counter>,
    #[serde(default)]
    like_count: Option<Counter>,
    #[serde(default)]
    comment_count: Option<Counter>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    #[serde(default, rename = "default")]
    fallback: Option<Thumbnail>,
    #[serde(default)]
    medium: Option<Thumbnail>,
    #[serde(default)]
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Engagement counter. The API encodes these as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Counter {
    Number(u64),
    Text(String),
}

impl Counter {
    fn value(&self, field: &str, owner: &str) -> Result<u64, AppError> {
        match self {
            Counter::Number(value) => Ok(*value),
            Counter::Text(text) => text.trim().parse::<u64>().map_err(|_| {
                AppError::malformed(
                    "statistics",
                    format!("{field} of {owner} is not a non-negative integer: '{text}'"),
                )
            }),
        }
    }

    fn value_or_zero(counter: Option<&Counter>, field: &str, owner: &str) -> Result<u64, AppError> {
        counter.map_or(Ok(0), |counter| counter.value(field, owner))
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

/// reqwest includes the full URL in transport errors; the key travels in the query string.
fn strip_key(message: &str, api_key: &str) -> String {
    if api_key.is_empty() { message.to_string() } else { message.replace(api_key, "[REDACTED]") }
}
