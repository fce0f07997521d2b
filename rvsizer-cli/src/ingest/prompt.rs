//! Flatten inventory rows into sizing prompts

use serde::{Deserialize, Serialize};

use super::cell::Row;
use super::mapping::canonical_name;

/// Error building a prompt batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// No rows to process
    EmptyInput,
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::EmptyInput => write!(f, "No data found in the Excel file"),
        }
    }
}

impl std::error::Error for IngestError {}

/// One prompt per worksheet row, in row order.
///
/// Serializes as `{ "prompts": [...] }`, the body accepted by the pricing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBatch {
    pub prompts: Vec<String>,
}

impl PromptBatch {
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Number of rows that produced no attributes at all
    pub fn blank_count(&self) -> usize {
        self.prompts.iter().filter(|p| p.is_empty()).count()
    }
}

/// Build `Name:Value,Name:Value,...` for a single row.
///
/// Columns are visited in the row's own order. Absent and empty values are
/// skipped; everything else is rendered with its default textual form under
/// its canonical name. A row with nothing populated yields an empty string.
pub fn build_prompt(row: &Row) -> String {
    row.iter()
        .filter(|(_, value)| value.is_populated())
        .map(|(column, value)| format!("{}:{}", canonical_name(column), value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the prompt batch for a worksheet
pub fn build_prompt_batch(rows: &[Row]) -> Result<PromptBatch, IngestError> {
    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let prompts = rows.iter().map(build_prompt).collect();
    Ok(PromptBatch { prompts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::CellValue;

    fn vm_row() -> Row {
        Row::new()
            .with("NumCPU", 2i64)
            .with("MemoryGB", 8i64)
            .with("DiskGB", 40i64)
            .with("OS", "RHEL9")
    }

    #[test]
    fn test_canonical_prompt() {
        assert_eq!(
            build_prompt(&vm_row()),
            "VCPU:2,Memory(GB):8,Disk(GB):40,OperatingSystem:RHEL9"
        );
    }

    #[test]
    fn test_prompt_follows_row_order() {
        let row = Row::new()
            .with("OS", "RHEL9")
            .with("DiskGB", 40i64)
            .with("NumCPU", 2i64);
        assert_eq!(build_prompt(&row), "OperatingSystem:RHEL9,Disk(GB):40,VCPU:2");
    }

    #[test]
    fn test_unknown_column_passes_through() {
        let row = Row::new().with("CustomTag", "foo");
        assert_eq!(build_prompt(&row), "CustomTag:foo");
    }

    #[test]
    fn test_unpopulated_values_are_omitted() {
        let row = Row::new()
            .with("VM", "web-01")
            .with("Annotation", "")
            .with("Folder", CellValue::Absent)
            .with("NumCPU", 4i64);

        let prompt = build_prompt(&row);
        assert_eq!(prompt, "VM:web-01,VCPU:4");
        assert!(!prompt.contains("Annotation"));
        assert!(!prompt.contains("null"));
    }

    #[test]
    fn test_blank_row_gives_empty_prompt() {
        let row = Row::new().with("VM", "").with("OS", CellValue::Absent);
        assert_eq!(build_prompt(&row), "");
        assert_eq!(build_prompt(&Row::new()), "");
    }

    #[test]
    fn test_fractional_and_boolean_values() {
        let row = Row::new()
            .with("MemoryGB", 1.5)
            .with("Powerstate", true)
            .with("Template", false);
        assert_eq!(
            build_prompt(&row),
            "Memory(GB):1.5,Powerstate:true,Template:false"
        );
    }

    #[test]
    fn test_synonyms_are_not_deduplicated() {
        let row = Row::new().with("NumCPU", 2i64).with("VCPU", 4i64);
        assert_eq!(build_prompt(&row), "VCPU:2,VCPU:4");
    }

    #[test]
    fn test_values_are_not_converted() {
        let row = Row::new()
            .with("Memory", "8192 MB")
            .with("Capacity", " 40 ");
        assert_eq!(build_prompt(&row), "Memory(GB):8192 MB,Disk(GB): 40 ");
    }

    #[test]
    fn test_batch_preserves_length_and_order() {
        let rows = vec![
            Row::new().with("VM", "a").with("NumCPU", 1i64),
            Row::new().with("VM", ""),
            Row::new().with("VM", "c").with("GuestOS", "Windows"),
        ];

        let batch = build_prompt_batch(&rows).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(
            batch.prompts,
            vec![
                "VM:a,VCPU:1".to_string(),
                String::new(),
                "VM:c,OperatingSystem:Windows".to_string(),
            ]
        );
        assert_eq!(batch.blank_count(), 1);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(build_prompt_batch(&[]), Err(IngestError::EmptyInput));
        assert_eq!(
            IngestError::EmptyInput.to_string(),
            "No data found in the Excel file"
        );
    }

    #[test]
    fn test_batch_is_deterministic() {
        let rows = vec![vm_row(), Row::new().with("CustomTag", "foo")];
        let first = build_prompt_batch(&rows).unwrap();
        let second = build_prompt_batch(&rows).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_serializes_as_prompts_body() {
        let batch = build_prompt_batch(&[vm_row()]).unwrap();
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prompts": ["VCPU:2,Memory(GB):8,Disk(GB):40,OperatingSystem:RHEL9"]
            })
        );
    }
}
