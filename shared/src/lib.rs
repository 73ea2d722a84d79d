//! Shared data models
//!
//! Transaction and template records exchanged between the sales/purchase
//! screens, the remote data service, and the printing pipeline. Screens
//! assemble these; the pipeline only reads them.

pub mod models;

pub use models::*;
