pub mod channel;
pub mod configuration;
pub mod error;
pub mod report;
pub mod video;

pub use channel::Channel;
pub use configuration::{AppConfig, Credentials, GeminiApiConfig, YouTubeApiConfig};
pub use error::AppError;
pub use report::{AnalysisOutcome, AnalysisReport, Narrative};
pub use video::{PAGE_SIZE, VideoRecord, VideoRecordSet};
