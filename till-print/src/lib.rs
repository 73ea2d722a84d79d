//! # till-print
//!
//! Document rendering and delivery pipeline for the point-of-sale screens.
//!
//! ## Scope
//!
//! This crate handles HOW a transaction becomes paper:
//! - Template resolution (stored per-kind config, default fallback)
//! - Verification payload (canonical summary encoded as a QR data URI)
//! - Document composition (self-contained HTML, inline styles)
//! - Delivery (ordered strategy fallback against the host print surface)
//! - Transient status (single busy indicator, auto-dismissing error notice)
//!
//! WHAT gets printed (assembling `TransactionRecord`s from sales, purchase
//! orders, or financial summaries) stays in the calling screens.
//!
//! ## Example
//!
//! ```ignore
//! use till_print::{MemorySettingsStore, PrintPipeline, UserAgentClassifier};
//!
//! let mut pipeline = PrintPipeline::new(settings, classifier, host, status);
//! let outcome = pipeline.print(&transaction).await;
//! ```
//!
//! `print` never returns an error: every failure either degrades (missing
//! verification image) or falls through the strategy chain and ends in
//! `PrintOutcome::ExhaustedAllStrategies`.

pub mod compose;
pub mod delivery;
pub mod environment;
pub mod pipeline;
pub mod settings;
pub mod status;
pub mod template;
pub mod verify;

// Re-exports
pub use compose::{DocumentComposer, RenderedDocument};
pub use delivery::{
    AttemptOutcome, DeliveryAttempt, DeliveryExecutor, DeliveryOutcome, DeliveryStrategy,
    PrintHost, SurfaceError, SurfaceHandle, SurfaceResult, select_strategies,
};
pub use environment::{DeviceClass, EnvironmentClassifier, FixedClassifier, UserAgentClassifier};
pub use pipeline::{PrintOutcome, PrintPipeline};
pub use settings::{MemorySettingsStore, SettingsStore, template_key};
pub use status::{IndicatorId, StatusPresenter, StatusSink};
pub use template::TemplateResolver;
pub use verify::{Verification, VerificationPayload};
