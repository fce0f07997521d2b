//! Spreadsheet ingestion: turn inventory rows into sizing prompts

mod cell;
pub mod mapping;
mod prompt;

pub use cell::{CellValue, Row};
pub use prompt::{PromptBatch, build_prompt_batch};

#[cfg(test)]
pub use prompt::IngestError;
