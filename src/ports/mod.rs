mod text_generator;
mod video_platform;

pub use text_generator::TextGenerator;
pub use video_platform::VideoPlatform;
