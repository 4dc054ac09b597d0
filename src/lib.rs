//! tubemind: summarize a YouTube channel's recent uploads with a generative model.
//!
//! The pipeline runs channel lookup, playlist enumeration, video detail fetch
//! and narrative summary in sequence, each through a port trait so the HTTP
//! adapters can be swapped for fakes.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{AnalyzeOptions, DEFAULT_CHANNEL_ID, analyze, create_context};
pub use domain::{
    AnalysisOutcome, AnalysisReport, AppError, Channel, Narrative, VideoRecord, VideoRecordSet,
};
