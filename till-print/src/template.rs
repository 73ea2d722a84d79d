//! Template resolver
//!
//! Loads the stored template configuration for a document kind, falling
//! back to the built-in default. Malformed settings must never block
//! printing, so this module has no error type at all.

use std::ops::RangeInclusive;

use tracing::warn;

use shared::{DocumentKind, TemplateConfig};

use crate::settings::{SettingsStore, template_key};

/// Usable on-page font sizes in px
const FONT_SIZE_RANGE: RangeInclusive<u32> = 6..=72;
/// Usable page widths in px
const PAGE_WIDTH_RANGE: RangeInclusive<u32> = 100..=1200;

/// Resolves per-kind template configuration from the settings store
pub struct TemplateResolver<'a, S: SettingsStore> {
    store: &'a S,
}

impl<'a, S: SettingsStore> TemplateResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve the template for a document kind
    ///
    /// Loaded fresh on every call; staleness within a session is acceptable
    /// since settings rarely change mid-operation.
    pub fn resolve(&self, kind: DocumentKind) -> TemplateConfig {
        let key = template_key(kind);

        let Some(raw) = self.store.get(&key) else {
            return TemplateConfig::default();
        };

        match serde_json::from_str(&raw) {
            Ok(config) => Self::sanitized(kind, config),
            Err(e) => {
                warn!(kind = kind.slug(), error = %e, "Stored template config malformed, using default");
                TemplateConfig::default()
            }
        }
    }

    /// Pull out-of-range display sizes back to the defaults
    ///
    /// Well-formed JSON can still carry unusable numbers; those fields fall
    /// back individually so the rest of the stored config survives.
    fn sanitized(kind: DocumentKind, mut config: TemplateConfig) -> TemplateConfig {
        let defaults = TemplateConfig::default();
        if !FONT_SIZE_RANGE.contains(&config.font_size) {
            warn!(
                kind = kind.slug(),
                font_size = config.font_size,
                "Stored font size out of range, using default"
            );
            config.font_size = defaults.font_size;
        }
        if !PAGE_WIDTH_RANGE.contains(&config.page_width) {
            warn!(
                kind = kind.slug(),
                page_width = config.page_width,
                "Stored page width out of range, using default"
            );
            config.page_width = defaults.page_width;
        }
        config
    }
}
