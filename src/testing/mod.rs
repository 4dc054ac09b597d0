pub mod fake_text_generator;
pub mod fake_video_platform;

pub use fake_text_generator::{FailingTextGenerator, FakeTextGenerator};
pub use fake_video_platform::{FakeVideoPlatform, PlatformCall, channel, video};
