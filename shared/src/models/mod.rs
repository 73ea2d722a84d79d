//! Data models
//!
//! Shared between the business screens and the printing pipeline.
//! All monetary values are `rust_decimal::Decimal`.

pub mod counterparty;
pub mod template;
pub mod transaction;

// Re-exports
pub use counterparty::*;
pub use template::*;
pub use transaction::*;
