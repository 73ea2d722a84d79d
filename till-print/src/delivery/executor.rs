//! Delivery executor
//!
//! Drives the strategy chain for one composed document. Each strategy is
//! attempted in order; a refused surface or a raising presentation attempt
//! advances to the next strategy, and only full exhaustion is terminal.

use tokio::time::sleep;
use tracing::{info, instrument, warn};

use super::strategy::DeliveryStrategy;
use super::surface::PrintHost;
use crate::compose::RenderedDocument;

/// Outcome of a single strategy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Succeeded,
    /// The runtime refused to create the presentation surface
    Blocked,
    /// An unexpected error during presentation
    Failed,
}

/// Transient per-strategy attempt record, confined to one print invocation
#[derive(Debug, Clone)]
pub struct DeliveryAttempt {
    pub strategy: DeliveryStrategy,
    pub outcome: AttemptOutcome,
}

/// Terminal state of a delivery run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Succeeded { strategy: DeliveryStrategy },
    ExhaustedAllStrategies,
}

/// Delivery executor
///
/// Borrows the host adapter for the duration of one delivery run. Holds no
/// state across runs: printing the same transaction twice produces two
/// independent, unlinked delivery attempts.
pub struct DeliveryExecutor<'a, H: PrintHost> {
    host: &'a mut H,
}

impl<'a, H: PrintHost> DeliveryExecutor<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }

    /// Present the document through each strategy in order
    ///
    /// Returns the terminal outcome plus the attempt record for each
    /// strategy actually tried.
    #[instrument(skip_all, fields(strategies = strategies.len()))]
    pub async fn deliver(
        &mut self,
        strategies: &[DeliveryStrategy],
        document: &RenderedDocument,
    ) -> (DeliveryOutcome, Vec<DeliveryAttempt>) {
        let mut attempts = Vec::with_capacity(strategies.len());

        for &strategy in strategies {
            let outcome = self.attempt(strategy, document.as_str()).await;
            attempts.push(DeliveryAttempt { strategy, outcome });

            if outcome == AttemptOutcome::Succeeded {
                info!(%strategy, attempts = attempts.len(), "Document delivered");
                return (DeliveryOutcome::Succeeded { strategy }, attempts);
            }
        }

        warn!(
            attempts = attempts.len(),
            "All delivery strategies exhausted"
        );
        (DeliveryOutcome::ExhaustedAllStrategies, attempts)
    }

    /// Attempt one strategy; never propagates host failures
    async fn attempt(&mut self, strategy: DeliveryStrategy, markup: &str) -> AttemptOutcome {
        let surface = match self.host.create_surface(strategy, markup).await {
            Ok(Some(surface)) => surface,
            Ok(None) => {
                warn!(%strategy, "Surface refused, trying next strategy");
                return AttemptOutcome::Blocked;
            }
            Err(e) => {
                warn!(%strategy, error = %e, "Surface creation failed, trying next strategy");
                return AttemptOutcome::Failed;
            }
        };

        // let the surface finish internal layout before printing
        sleep(strategy.settle_delay()).await;

        if let Err(e) = self.host.issue_print(&surface).await {
            warn!(%strategy, error = %e, "Print instruction failed, trying next strategy");
            if let Err(te) = self.host.teardown(surface).await {
                warn!(%strategy, error = %te, "Teardown after failed print also failed");
            }
            return AttemptOutcome::Failed;
        }

        sleep(strategy.teardown_delay()).await;

        // print went out; a teardown failure no longer affects the outcome
        if let Err(e) = self.host.teardown(surface).await {
            warn!(%strategy, error = %e, "Surface teardown failed after print");
        }

        AttemptOutcome::Succeeded
    }
}
