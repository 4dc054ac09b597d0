use crate::domain::AppError;
use crate::ports::TextGenerator;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct FakeTextGenerator {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub response: String,
}

impl FakeTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), response: response.into() }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeTextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Generator that always fails, for error propagation tests.
pub struct FailingTextGenerator;

impl TextGenerator for FailingTextGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::GeminiApi { message: "quota exhausted".to_string(), status: Some(429) })
    }
}
