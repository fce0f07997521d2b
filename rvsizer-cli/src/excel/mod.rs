//! Excel input for RVTools exports

mod reader;

pub use reader::read_rows_from_path;

#[cfg(test)]
pub use reader::DecodeError;
