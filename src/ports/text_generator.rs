//! Generative text port definition.

use crate::domain::AppError;

/// Port for a single prompt-in, text-out completion.
pub trait TextGenerator {
    /// Send `prompt` to the model and return its text unmodified.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}
