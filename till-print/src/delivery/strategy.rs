//! Delivery strategies and selection order

use std::fmt;
use std::time::Duration;

use crate::environment::DeviceClass;

/// One concrete mechanism for presenting a document to the print function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStrategy {
    /// New top-level browsing context holding only the document
    OpenDetachedWindow,
    /// Print-only overlay mounted into the current page
    InPlaceOverlay,
    /// Temporarily swap the visible page content for the document.
    /// Destructive, so it is always the last resort.
    ReplaceCurrentDocument,
}

impl DeliveryStrategy {
    /// Delay between surface creation and the print instruction, giving the
    /// surface time to finish internal layout. Fixed short timeouts, not
    /// correctness-critical values.
    pub fn settle_delay(&self) -> Duration {
        match self {
            DeliveryStrategy::OpenDetachedWindow => Duration::from_millis(250),
            DeliveryStrategy::InPlaceOverlay => Duration::from_millis(500),
            DeliveryStrategy::ReplaceCurrentDocument => Duration::from_millis(500),
        }
    }

    /// Delay between the print instruction and surface teardown
    pub fn teardown_delay(&self) -> Duration {
        match self {
            // the original page content comes back only after the print
            // dialog has had time to capture the replacement
            DeliveryStrategy::ReplaceCurrentDocument => Duration::from_millis(1000),
            _ => Duration::ZERO,
        }
    }
}

impl fmt::Display for DeliveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeliveryStrategy::OpenDetachedWindow => "detached-window",
            DeliveryStrategy::InPlaceOverlay => "in-place-overlay",
            DeliveryStrategy::ReplaceCurrentDocument => "replace-document",
        };
        f.write_str(name)
    }
}

/// Ordered strategy list for a device class
///
/// Desktop prefers a detached window because it does not disturb the
/// current page; mobile prefers the overlay because detached windows are
/// frequently blocked or non-interactive there. Replacing the current
/// document is always the final fallback.
pub fn select_strategies(class: DeviceClass) -> Vec<DeliveryStrategy> {
    match class {
        DeviceClass::Desktop => vec![
            DeliveryStrategy::OpenDetachedWindow,
            DeliveryStrategy::InPlaceOverlay,
            DeliveryStrategy::ReplaceCurrentDocument,
        ],
        DeviceClass::Mobile => vec![
            DeliveryStrategy::InPlaceOverlay,
            DeliveryStrategy::OpenDetachedWindow,
            DeliveryStrategy::ReplaceCurrentDocument,
        ],
    }
}
