pub mod gemini_client_http;
pub mod youtube_client_http;

pub use gemini_client_http::HttpGeminiClient;
pub use youtube_client_http::HttpYouTubeClient;
