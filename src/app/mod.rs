pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod render;

pub use context::AppContext;
