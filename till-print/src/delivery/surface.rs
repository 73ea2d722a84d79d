//! Print surface adapter seam
//!
//! The host environment provides three capabilities: open a detached
//! presentation surface, render markup into an in-page overlay, and invoke
//! the platform print dialog on a surface. They are black boxes to the
//! pipeline; their whole contract is that surface creation may be refused
//! (`Ok(None)`) or any call may fail (`Err`).

use thiserror::Error;

use super::strategy::DeliveryStrategy;

/// Surface adapter error types
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Surface creation raised, as opposed to being refused
    #[error("Surface creation failed: {0}")]
    Creation(String),

    /// The print instruction raised on a live surface
    #[error("Print instruction failed: {0}")]
    Print(String),

    /// Surface teardown raised; the print itself may still have gone out
    #[error("Surface teardown failed: {0}")]
    Teardown(String),
}

/// Result type for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Opaque handle to a live presentation surface
///
/// Minted by the host on creation and handed back for print/teardown, so
/// no strategy ever has to find its surface again by global lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceHandle {
    id: u64,
    strategy: DeliveryStrategy,
}

impl SurfaceHandle {
    pub fn new(id: u64, strategy: DeliveryStrategy) -> Self {
        Self { id, strategy }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn strategy(&self) -> DeliveryStrategy {
        self.strategy
    }
}

/// Trait for host print-surface adapters
#[allow(async_fn_in_trait)]
pub trait PrintHost {
    /// Create a presentation surface holding the rendered markup
    ///
    /// `Ok(None)` means the runtime refused to provide the surface (for
    /// example a detached window request returning no handle). That is an
    /// expected, recoverable outcome, not an error.
    async fn create_surface(
        &mut self,
        strategy: DeliveryStrategy,
        markup: &str,
    ) -> SurfaceResult<Option<SurfaceHandle>>;

    /// Invoke the platform print dialog on a live surface
    async fn issue_print(&mut self, surface: &SurfaceHandle) -> SurfaceResult<()>;

    /// Tear the surface down: close the window, remove the overlay, or
    /// restore the replaced page content
    async fn teardown(&mut self, surface: SurfaceHandle) -> SurfaceResult<()>;
}
