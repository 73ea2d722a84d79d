//! Document delivery
//!
//! Presents a composed document to the platform print function through an
//! ordered chain of strategies with failure detection and bounded settle
//! delays. Every branch is exception-safe: a failed strategy degrades to
//! the next one instead of propagating.

pub mod executor;
pub mod strategy;
pub mod surface;

pub use executor::{AttemptOutcome, DeliveryAttempt, DeliveryExecutor, DeliveryOutcome};
pub use strategy::{DeliveryStrategy, select_strategies};
pub use surface::{PrintHost, SurfaceError, SurfaceHandle, SurfaceResult};
