//! Settings store seam
//!
//! The pipeline only reads settings; configuration screens own the writes.

use std::collections::HashMap;

use shared::DocumentKind;

/// Settings key for a document kind's template configuration
pub fn template_key(kind: DocumentKind) -> String {
    format!("template:{}", kind.slug())
}

/// Read-only key-value settings access
///
/// Implementations bridge to whatever the host persists settings in.
/// A `None` return and a stored-but-malformed value are both expected
/// conditions; callers fall back to defaults.
pub trait SettingsStore {
    /// Fetch the raw stored value for a key
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory settings store
///
/// Used by tests and by hosts that load settings up front.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a stored value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_key() {
        assert_eq!(
            template_key(DocumentKind::SalesReceipt),
            "template:sales_receipt"
        );
        assert_eq!(
            template_key(DocumentKind::PurchaseOrder),
            "template:purchase_order"
        );
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemorySettingsStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("template:sales_receipt", "{}");
        assert_eq!(store.get("template:sales_receipt").as_deref(), Some("{}"));
    }
}
