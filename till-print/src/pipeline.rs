//! Public print pipeline
//!
//! Wires the resolver, verification builder, composer, selector, and
//! executor behind one entry point. `print` resolves to a terminal status
//! instead of propagating anything: printing is a best-effort side channel
//! and must never take the calling screen down with it.

use tracing::{error, info, instrument};

use shared::TransactionRecord;

use crate::compose::DocumentComposer;
use crate::delivery::{
    DeliveryAttempt, DeliveryExecutor, DeliveryOutcome, DeliveryStrategy, PrintHost,
    select_strategies,
};
use crate::environment::EnvironmentClassifier;
use crate::settings::SettingsStore;
use crate::status::{StatusPresenter, StatusSink};
use crate::template::TemplateResolver;
use crate::verify::Verification;

/// Terminal status of one print invocation
#[derive(Debug, Clone)]
pub enum PrintOutcome {
    Succeeded {
        strategy: DeliveryStrategy,
        attempts: Vec<DeliveryAttempt>,
    },
    ExhaustedAllStrategies {
        attempts: Vec<DeliveryAttempt>,
    },
}

impl PrintOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PrintOutcome::Succeeded { .. })
    }

    pub fn attempts(&self) -> &[DeliveryAttempt] {
        match self {
            PrintOutcome::Succeeded { attempts, .. } => attempts,
            PrintOutcome::ExhaustedAllStrategies { attempts } => attempts,
        }
    }
}

/// Document print pipeline
///
/// Holds no per-transaction state: invoking `print` twice for the same
/// transaction produces two independent delivery attempts.
pub struct PrintPipeline<S, C, H, K>
where
    S: SettingsStore,
    C: EnvironmentClassifier,
    H: PrintHost,
    K: StatusSink,
{
    settings: S,
    classifier: C,
    host: H,
    status: StatusPresenter<K>,
}

impl<S, C, H, K> PrintPipeline<S, C, H, K>
where
    S: SettingsStore,
    C: EnvironmentClassifier,
    H: PrintHost,
    K: StatusSink,
{
    pub fn new(settings: S, classifier: C, host: H, sink: K) -> Self {
        Self {
            settings,
            classifier,
            host,
            status: StatusPresenter::new(sink),
        }
    }

    /// Compose and deliver one document
    ///
    /// The transaction is only read; its `document_kind` drives template
    /// resolution, layout, and the verification payload alike. The template
    /// is loaded fresh from settings on every call.
    #[instrument(skip_all, fields(kind = transaction.document_kind.slug(), reference = %transaction.reference_number))]
    pub async fn print(&mut self, transaction: &TransactionRecord) -> PrintOutcome {
        self.status.show("Preparing document...");

        let template = TemplateResolver::new(&self.settings).resolve(transaction.document_kind);
        let verification = Verification::build(transaction);
        let document = DocumentComposer::compose(transaction, &template, &verification);

        let strategies = select_strategies(self.classifier.classify());
        let (outcome, attempts) = DeliveryExecutor::new(&mut self.host)
            .deliver(&strategies, &document)
            .await;

        self.status.hide();

        match outcome {
            DeliveryOutcome::Succeeded { strategy } => {
                info!(%strategy, attempts = attempts.len(), "Document printed");
                PrintOutcome::Succeeded {
                    strategy,
                    attempts,
                }
            }
            DeliveryOutcome::ExhaustedAllStrategies => {
                error!(attempts = attempts.len(), "Printing failed on every strategy");
                self.status
                    .show_error("There was a problem printing the document. Please try again.");
                PrintOutcome::ExhaustedAllStrategies { attempts }
            }
        }
    }

    /// Access the status sink, mainly for host integration and tests
    pub fn status_sink(&self) -> &K {
        self.status.sink()
    }

    /// Access the host adapter
    pub fn host(&self) -> &H {
        &self.host
    }
}
