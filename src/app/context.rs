use crate::ports::{TextGenerator, VideoPlatform};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: VideoPlatform, G: TextGenerator> {
    platform: P,
    generator: G,
}

impl<P: VideoPlatform, G: TextGenerator> AppContext<P, G> {
    /// Create a new application context.
    pub fn new(platform: P, generator: G) -> Self {
        Self { platform, generator }
    }

    /// Get a reference to the video platform client.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Get a reference to the text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }
}
