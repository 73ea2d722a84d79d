//! Transient status presentation
//!
//! A single blocking "working" indicator plus a dismissible error notice.
//! The presenter owns the one-indicator slot; the host sink only renders
//! what it is told and mints handles, so there is no global lookup.

use std::time::Duration;

use tracing::debug;

/// How long an error notice stays up before the host dismisses it
const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(10);

/// Handle to a rendered indicator, minted by the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorId(pub u64);

/// Host-rendered status surface
///
/// Contract: `render_error` must not block the caller; the host dismisses
/// the notice itself after `auto_dismiss` and also offers manual
/// dismissal.
pub trait StatusSink {
    /// Render a blocking busy indicator and return its handle
    fn render_busy(&mut self, message: &str) -> IndicatorId;

    /// Remove a previously rendered indicator; unknown handles are ignored
    fn clear(&mut self, indicator: IndicatorId);

    /// Render a dismissible error notice
    fn render_error(&mut self, message: &str, auto_dismiss: Duration);
}

/// Single-slot status presenter
///
/// At most one busy indicator exists at a time: showing a new one first
/// tears down the previous one (last show wins). `hide` is always safe,
/// shown or not.
pub struct StatusPresenter<K: StatusSink> {
    sink: K,
    active: Option<IndicatorId>,
}

impl<K: StatusSink> StatusPresenter<K> {
    pub fn new(sink: K) -> Self {
        Self { sink, active: None }
    }

    /// Show the busy indicator, replacing any previous one
    pub fn show(&mut self, message: &str) {
        if let Some(previous) = self.active.take() {
            debug!("Replacing active busy indicator");
            self.sink.clear(previous);
        }
        self.active = Some(self.sink.render_busy(message));
    }

    /// Withdraw the busy indicator if one is showing
    pub fn hide(&mut self) {
        if let Some(indicator) = self.active.take() {
            self.sink.clear(indicator);
        }
    }

    /// Show the terminal error notice; auto-dismissed by the host
    pub fn show_error(&mut self, message: &str) {
        self.sink.render_error(message, ERROR_DISMISS_AFTER);
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        next_id: u64,
        busy: Vec<(IndicatorId, String)>,
        cleared: Vec<IndicatorId>,
        errors: Vec<(String, Duration)>,
    }

    impl StatusSink for RecordingSink {
        fn render_busy(&mut self, message: &str) -> IndicatorId {
            self.next_id += 1;
            let id = IndicatorId(self.next_id);
            self.busy.push((id, message.to_string()));
            id
        }

        fn clear(&mut self, indicator: IndicatorId) {
            self.cleared.push(indicator);
        }

        fn render_error(&mut self, message: &str, auto_dismiss: Duration) {
            self.errors.push((message.to_string(), auto_dismiss));
        }
    }

    #[test]
    fn test_last_show_wins() {
        let mut presenter = StatusPresenter::new(RecordingSink::default());

        presenter.show("Preparing receipt...");
        presenter.show("Printing...");

        let sink = presenter.sink();
        assert_eq!(sink.busy.len(), 2);
        // the first indicator was cleared before the second appeared
        assert_eq!(sink.cleared, vec![IndicatorId(1)]);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut presenter = StatusPresenter::new(RecordingSink::default());

        presenter.hide();
        presenter.show("Printing...");
        presenter.hide();
        presenter.hide();

        assert_eq!(presenter.sink().cleared, vec![IndicatorId(1)]);
    }

    #[test]
    fn test_error_carries_auto_dismiss() {
        let mut presenter = StatusPresenter::new(RecordingSink::default());
        presenter.show_error("Printing failed");

        let errors = &presenter.sink().errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, Duration::from_secs(10));
    }
}
