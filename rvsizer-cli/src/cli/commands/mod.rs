pub mod config;
pub mod parse;
pub mod provision;
pub mod submit;

use std::path::Path;

use anyhow::Result;

use crate::excel::read_rows_from_path;
use crate::ingest::{PromptBatch, build_prompt_batch};

/// Decode the first sheet of `path` and flatten it into prompts
pub(crate) fn load_prompt_batch(path: &Path) -> Result<PromptBatch> {
    let rows = read_rows_from_path(path)?;
    let batch = build_prompt_batch(&rows)?;

    let blank = batch.blank_count();
    if blank > 0 {
        log::warn!("{} of {} rows produced an empty prompt", blank, batch.len());
    }

    Ok(batch)
}
