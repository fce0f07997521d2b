//! Remote endpoint access
//!
//! A single JSON client posts prompt batches to the pricing service and
//! provisioning requests to their endpoints, and turns transport failures into
//! the messages shown to the user.

pub mod client;
pub mod error;
pub mod response;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use response::PricingOutcome;
