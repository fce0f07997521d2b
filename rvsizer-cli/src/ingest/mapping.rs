//! Canonical attribute names for RVTools column headers
//!
//! Each canonical name lists the raw headers that are rewritten to it.
//! Headers not listed here pass through unchanged.

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const VCPU: &str = "VCPU";
pub const MEMORY_GB: &str = "Memory(GB)";
pub const DISK_GB: &str = "Disk(GB)";
pub const OPERATING_SYSTEM: &str = "OperatingSystem";

/// Canonical name -> accepted raw header synonyms (exact, case-sensitive)
pub const FIELD_SYNONYMS: &[(&str, &[&str])] = &[
    (VCPU, &["NumCPU", "VCPU"]),
    (MEMORY_GB, &["MemoryGB", "Memory"]),
    (DISK_GB, &["DiskGB", "Capacity"]),
    (OPERATING_SYSTEM, &["OS", "GuestOS"]),
];

/// Raw header -> canonical name
static CANONICAL_BY_HEADER: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    FIELD_SYNONYMS
        .iter()
        .flat_map(|(canonical, synonyms)| synonyms.iter().map(move |raw| (*raw, *canonical)))
        .collect()
});

/// Resolve the canonical attribute name for a raw column header
pub fn canonical_name(header: &str) -> &str {
    CANONICAL_BY_HEADER.get(header).copied().unwrap_or(header)
}
