//! Shared testing utilities for tubemind CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MODEL: &str = "gemini-2.5-flash";

/// Isolated working directory whose config points both APIs at one mock server.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new environment with a config file but no secrets.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();

        let config = format!(
            "[youtube]\napi_url = \"{url}/youtube/v3\"\ntimeout_secs = 5\n\n\
             [gemini]\napi_url = \"{url}/v1beta\"\nmodel = \"{MODEL}\"\ntimeout_secs = 5\n",
            url = server.url()
        );
        fs::write(root.path().join("tubemind.toml"), config).expect("Failed to write config");

        Self { root, server }
    }

    /// Create a new environment with both credentials in the default secrets file.
    pub fn with_secrets() -> Self {
        let ctx = Self::new();
        ctx.write_secrets("YOUTUBE_API_KEY = \"yt-test-key\"\nGEMINI_API_KEY = \"gm-test-key\"\n");
        ctx
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn secrets_path(&self) -> PathBuf {
        self.root.path().join(".tubemind").join("secrets.toml")
    }

    pub fn write_secrets(&self, content: &str) {
        let path = self.secrets_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create secrets dir");
        fs::write(path, content).expect("Failed to write secrets");
    }

    /// Build a command for the compiled `tubemind` binary inside the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tubemind").expect("Failed to locate tubemind binary");
        cmd.current_dir(self.work_dir())
            .env_remove("YOUTUBE_API_KEY")
            .env_remove("GEMINI_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn youtube_path(resource: &str) -> String {
        format!("/youtube/v3/{resource}")
    }

    pub fn gemini_path() -> String {
        format!("/v1beta/models/{MODEL}:generateContent")
    }
}

pub const CHANNEL_BODY: &str = r#"{"items":[{
    "id":"UCrust",
    "snippet":{"title":"Rust Weekly","thumbnails":{"medium":{"url":"https://yt3.example/rust.jpg"}}},
    "contentDetails":{"relatedPlaylists":{"uploads":"UUrust"}},
    "statistics":{"subscriberCount":"4200","videoCount":"3"}
}]}"#;

pub const PLAYLIST_BODY: &str = r#"{"items":[
    {"contentDetails":{"videoId":"vid1"}},
    {"contentDetails":{"videoId":"vid2"}}
]}"#;

pub const VIDEOS_BODY: &str = r#"{"items":[
    {"id":"vid2","snippet":{"title":"Borrow checker in 100 seconds","thumbnails":{"high":{"url":"https://i.ytimg.com/vi/vid2/hqdefault.jpg"}}},
     "statistics":{"viewCount":"98000","likeCount":"5100"}},
    {"id":"vid1","snippet":{"title":"Async Rust explained","thumbnails":{"high":{"url":"https://i.ytimg.com/vi/vid1/hqdefault.jpg"}}},
     "statistics":{"viewCount":"12000","likeCount":"640","commentCount":"88"}}
]}"#;

pub const GEMINI_BODY: &str = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"**Top video:** Borrow checker in 100 seconds\n1. Lifetimes in 100 seconds"}]},"finishReason":"STOP"}]}"#;
